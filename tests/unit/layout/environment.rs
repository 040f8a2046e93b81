use super::*;

#[test]
fn phone_orientations_swap_size_classes() {
    let portrait = LayoutEnvironment::phone_portrait();
    assert_eq!(portrait.horizontal_size_class, SizeClass::Compact);
    assert_eq!(portrait.vertical_size_class, SizeClass::Regular);

    let landscape = LayoutEnvironment::phone_landscape();
    assert_eq!(landscape.horizontal_size_class, SizeClass::Regular);
    assert_eq!(landscape.vertical_size_class, SizeClass::Compact);

    assert_eq!(portrait.rotated(), landscape);
}

#[test]
fn thresholds_are_inclusive() {
    let env = LayoutEnvironment::from_container(Size::new(600.0, 499.0));
    assert_eq!(env.horizontal_size_class, SizeClass::Regular);
    assert_eq!(env.vertical_size_class, SizeClass::Compact);
}

#[test]
fn size_classes_default_when_missing_from_json() {
    let env: LayoutEnvironment =
        serde_json::from_str(r#"{"container":{"width":320.0,"height":480.0}}"#).unwrap();
    assert_eq!(env.horizontal_size_class, SizeClass::Compact);
    assert_eq!(env.container.width, 320.0);
}

#[test]
fn explicit_size_classes_are_kept() {
    let env = LayoutEnvironment::new(
        Size::new(1024.0, 1366.0),
        SizeClass::Compact,
        SizeClass::Compact,
    );
    assert_eq!(env.horizontal_size_class, SizeClass::Compact);
    assert_eq!(env.vertical_size_class, SizeClass::Compact);
    assert_ne!(env, LayoutEnvironment::from_container(env.container));
}
