use super::*;
use crate::foundation::core::Size;

const TWO: NonZeroUsize = NonZeroUsize::new(2).unwrap();
const FIVE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

fn item(width: f64, height: f64) -> Item {
    Item {
        size: LayoutSize::new(
            Dimension::fractional_width(width).unwrap(),
            Dimension::fractional_height(height).unwrap(),
        ),
        content_insets: DirectionalInsets::ZERO,
        supplementary_items: Vec::new(),
    }
}

fn group(axis: Axis, children: Vec<GroupChild>, repeat: Option<NonZeroUsize>) -> Group {
    Group {
        size: LayoutSize::full(),
        axis,
        children,
        repeat,
        inter_item_spacing: 0.0,
        supplementary_items: Vec::new(),
    }
}

#[test]
fn leaf_count_expands_nested_repeats() {
    let small = group(Axis::Vertical, vec![item(1.0, 0.5).into()], Some(TWO));
    let top = group(
        Axis::Horizontal,
        vec![item(0.5, 1.0).into(), small.into()],
        None,
    );
    let bottom = group(Axis::Horizontal, vec![item(1.0, 1.0).into()], Some(FIVE));
    let root = group(Axis::Vertical, vec![top.into(), bottom.into()], None);
    assert_eq!(root.leaf_count(), 8);

    let section = Section::new(root);
    assert_eq!(section.group_count(0), 0);
    assert_eq!(section.group_count(8), 1);
    assert_eq!(section.group_count(101), 13);
}

#[test]
fn expanded_children_replicates_single_child() {
    let g = group(Axis::Horizontal, vec![item(1.0, 1.0).into()], Some(FIVE));
    assert_eq!(g.expanded_children().count(), 5);
}

#[test]
fn validate_rejects_repeat_with_multiple_children() {
    let g = group(
        Axis::Horizontal,
        vec![item(1.0, 1.0).into(), item(1.0, 1.0).into()],
        Some(TWO),
    );
    let err = Section::new(g).validate().unwrap_err();
    assert!(err.to_string().contains("repeats its child"));
}

#[test]
fn validate_rejects_empty_groups_and_negative_spacing() {
    assert!(
        Section::new(group(Axis::Vertical, vec![], None))
            .validate()
            .is_err()
    );
    let mut section = Section::new(group(Axis::Vertical, vec![item(1.0, 1.0).into()], None));
    section.inter_group_spacing = -4.0;
    assert!(section.validate().is_err());
}

#[test]
fn size_errors_name_the_offending_element() {
    let mut bad = item(1.0, 1.0);
    bad.size.width = Dimension::absolute(-1.0);
    let nested = group(Axis::Vertical, vec![bad.into()], None);
    let section = Section::new(group(Axis::Horizontal, vec![nested.into()], None));
    let err = section.validate().unwrap_err().to_string();
    assert!(
        err.contains("section.group.children[0].children[0].size.width"),
        "{err}"
    );

    let mut section = Section::new(group(Axis::Vertical, vec![item(1.0, 1.0).into()], None));
    section
        .boundary_supplementary_items
        .push(BoundarySupplementaryItem::new(
            LayoutSize::new(Dimension::full_width(), Dimension::estimated(f64::NAN)),
            SupplementaryKind::SectionHeader,
            RectAlignment::Top,
        ));
    let err = section.validate().unwrap_err().to_string();
    assert!(
        err.contains("section.boundary_supplementary_items[0].size.height"),
        "{err}"
    );
}

#[test]
fn list_section_uses_estimated_rows() {
    let s = Section::list(ListAppearance::Plain);
    assert!(s.group.size.height.is_estimated());
    assert_eq!(s.items_per_group(), 1);
    assert_eq!(s.content_insets, DirectionalInsets::ZERO);

    let inset = Section::list(ListAppearance::InsetGrouped);
    assert!(inset.content_insets.leading > 0.0);
}

#[test]
fn rect_alignment_placements() {
    assert_eq!(RectAlignment::TopTrailing.horizontal(), AxisPlacement::End);
    assert_eq!(RectAlignment::TopTrailing.vertical(), AxisPlacement::Start);
    assert_eq!(RectAlignment::Bottom.horizontal(), AxisPlacement::Center);
    assert_eq!(RectAlignment::Leading.vertical(), AxisPlacement::Center);
}

#[test]
fn resolve_sections_records_missing_sections() {
    let layout = CompositionalLayout::dynamic(|idx, env| {
        (idx < 2 && env.container.width > 100.0)
            .then(|| Section::list(ListAppearance::Plain))
    });
    let env = LayoutEnvironment::from_container(Size::new(390.0, 844.0));
    let desc = layout.resolve_sections(3, &env);
    assert_eq!(desc.sections.len(), 3);
    assert!(desc.sections[0].is_some());
    assert!(desc.sections[2].is_none());
}

#[test]
fn section_json_round_trip_keeps_defaults() {
    let json = r#"{
        "group": {
            "size": {
                "width": {"mode": "fractional", "of": "horizontal", "fraction": 1.0},
                "height": {"mode": "absolute", "points": 80.0}
            },
            "axis": "horizontal",
            "repeat": 2,
            "children": [{
                "node": "item",
                "size": {
                    "width": {"mode": "fractional", "of": "horizontal", "fraction": 1.0},
                    "height": {"mode": "fractional", "of": "vertical", "fraction": 1.0}
                }
            }]
        },
        "boundary_supplementary_items": [{
            "size": {
                "width": {"mode": "fractional", "of": "horizontal", "fraction": 1.0},
                "height": {"mode": "estimated", "points": 56.0}
            },
            "kind": "section_header",
            "alignment": "top"
        }]
    }"#;
    let section: Section = serde_json::from_str(json).unwrap();
    section.validate().unwrap();
    assert_eq!(section.items_per_group(), 2);
    assert_eq!(section.orthogonal_scrolling, OrthogonalScrolling::None);
    let header = &section.boundary_supplementary_items[0];
    assert!(header.extends_boundary);
    assert!(!header.pin_to_visible_bounds);
    assert_eq!(header.kind, SupplementaryKind::SectionHeader);
}

#[test]
fn repeat_of_zero_is_rejected_by_serde() {
    let json = r#"{
        "size": {
            "width": {"mode": "absolute", "points": 10.0},
            "height": {"mode": "absolute", "points": 10.0}
        },
        "axis": "vertical",
        "repeat": 0,
        "children": []
    }"#;
    assert!(serde_json::from_str::<Group>(json).is_err());
}

#[test]
fn every_scrolling_mode_but_none_is_orthogonal() {
    let modes = [
        (OrthogonalScrolling::None, "none"),
        (OrthogonalScrolling::Continuous, "continuous"),
        (OrthogonalScrolling::ContinuousLeadingEdge, "continuous_leading_edge"),
        (OrthogonalScrolling::Paging, "paging"),
        (OrthogonalScrolling::GroupPaging, "group_paging"),
        (OrthogonalScrolling::GroupPagingCentered, "group_paging_centered"),
    ];
    for (mode, name) in modes {
        assert_eq!(mode.is_orthogonal(), mode != OrthogonalScrolling::None);
        assert_eq!(serde_json::to_string(&mode).unwrap(), format!("\"{name}\""));
        let parsed: OrthogonalScrolling = serde_json::from_str(&format!("\"{name}\"")).unwrap();
        assert_eq!(parsed, mode);
    }
}

#[test]
fn overlapping_boundary_items_do_not_extend_the_boundary() {
    let header = BoundarySupplementaryItem::new(
        LayoutSize::full(),
        SupplementaryKind::SectionHeader,
        RectAlignment::Top,
    );
    assert!(header.extends_boundary);
    assert!(!header.overlapping().extends_boundary);
}
