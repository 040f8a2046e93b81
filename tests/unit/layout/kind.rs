use super::*;

#[test]
fn custom_kinds_never_collide_with_builtins() {
    let custom = SupplementaryKind::custom("section_header");
    assert_ne!(custom, SupplementaryKind::SectionHeader);
    assert_eq!(custom, SupplementaryKind::Custom(CustomKind::owned("section_header")));
    assert_eq!(custom.to_string(), "custom:section_header");
    assert_eq!(SupplementaryKind::SectionHeader.to_string(), "section-header");
}

#[test]
fn kinds_serialize_with_explicit_namespace() {
    let json = serde_json::to_string(&SupplementaryKind::custom("CustomKind")).unwrap();
    assert_eq!(json, r#"{"custom":"CustomKind"}"#);
    let back: SupplementaryKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, SupplementaryKind::custom("CustomKind"));

    let bg: DecorationKind = serde_json::from_str(r#""section_background""#).unwrap();
    assert_eq!(bg, DecorationKind::SectionBackground);
    assert_eq!(bg.to_string(), "section-background");
}
