use super::*;
use crate::foundation::core::IndexPath;
use crate::layout::solver::ElementCategory;

fn attributes(frame: Rect, z_index: i32) -> LayoutAttributes {
    LayoutAttributes {
        category: ElementCategory::Cell,
        index_path: IndexPath::new(0, 0),
        frame,
        z_index,
        pinned: false,
        estimated: false,
    }
}

#[test]
fn presets_match_their_roles() {
    let cell = ViewStyle::collection_cell();
    assert_eq!(cell.background, Color::Blue);
    assert_eq!(cell.border.map(|b| b.color), Some(Color::Cyan));
    assert!(cell.multiline);

    let background = ViewStyle::section_background();
    assert_eq!(background.corner_radius, 16.0);
    assert_eq!(background.border.map(|b| b.width), Some(3.0));

    let header = ViewStyle::supplementary().with_background(Color::Yellow);
    assert_eq!(header.background, Color::Yellow);
    assert_eq!(header.font.weight, FontWeight::Medium);
}

#[test]
fn text_color_overrides_only_the_text() {
    let style = ViewStyle::collection_cell().with_text_color(Color::Label);
    assert_eq!(style.text_color, Color::Label);
    assert_eq!(style.background, ViewStyle::collection_cell().background);
}

#[test]
fn placing_applies_label_insets_and_z_index() {
    let view = render(
        "collection-cell",
        ViewStyle::collection_cell(),
        Some("7".to_owned()),
    );
    let placed = place(view, attributes(Rect::new(0.0, 0.0, 100.0, 50.0), 3));
    assert_eq!(placed.z_index(), 3);
    assert_eq!(placed.label_frame, Some(Rect::new(20.0, 12.0, 80.0, 38.0)));

    let small = place(
        render("collection-cell", ViewStyle::collection_cell(), Some(String::new())),
        attributes(Rect::new(0.0, 0.0, 10.0, 10.0), 0),
    );
    let label = small.label_frame.unwrap();
    assert!(label.width() >= 0.0 && label.height() >= 0.0);
}

#[test]
fn views_without_text_have_no_label() {
    let placed = place(
        render("background-view", ViewStyle::section_background(), None),
        attributes(Rect::new(0.0, 0.0, 10.0, 10.0), -1),
    );
    assert!(placed.label_frame.is_none());
    let json = serde_json::to_value(&placed).unwrap();
    assert!(json.get("label_frame").is_none());
    assert_eq!(json["view"]["style"]["background"], "red");
}

#[test]
fn colors_expose_rgba() {
    assert_eq!(Color::Clear.rgba8()[3], 0);
    assert!(!Color::Clear.is_opaque());
    assert!(Color::Mint.is_opaque());
}
