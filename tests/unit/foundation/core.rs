use super::*;

#[test]
fn inset_rect_clamps_to_zero_size() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    let shrunk = DirectionalInsets::uniform(8.0).inset_rect(r);
    assert_eq!(shrunk.x0, 8.0);
    assert_eq!(shrunk.width(), 0.0);
    assert_eq!(shrunk.height(), 0.0);
}

#[test]
fn outset_undoes_inset() {
    let r = Rect::new(10.0, 20.0, 110.0, 220.0);
    let insets = DirectionalInsets::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(insets.outset_rect(insets.inset_rect(r)), r);
}

#[test]
fn negative_insets_are_rejected() {
    assert!(DirectionalInsets::new(0.0, -1.0, 0.0, 0.0).validate("section").is_err());
    assert!(DirectionalInsets::uniform(f64::NAN).validate("section").is_err());
    DirectionalInsets::uniform(32.0).validate("section").unwrap();
}

#[test]
fn axis_cross_and_extent() {
    let s = Size::new(3.0, 4.0);
    assert_eq!(Axis::Horizontal.extent(s), 3.0);
    assert_eq!(Axis::Horizontal.cross().extent(s), 4.0);
}

#[test]
fn index_paths_order_by_section_then_item() {
    assert!(IndexPath::new(0, 9) < IndexPath::new(1, 0));
    assert_eq!(IndexPath::new(2, 3).to_string(), "[2, 3]");
}
