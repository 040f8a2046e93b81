use super::*;
use crate::foundation::core::Rect;
use crate::layout::environment::LayoutEnvironment;
use crate::layout::kind::{DecorationKind, SupplementaryKind};
use crate::render::view::Color;

fn portrait() -> LayoutEnvironment {
    LayoutEnvironment::phone_portrait()
}

#[test]
fn slugs_round_trip_and_unknown_names_list_the_catalog() {
    for screen in Screen::ALL {
        assert_eq!(screen.slug().parse::<Screen>().unwrap(), screen);
        assert_eq!(screen.to_string(), screen.slug());
    }
    let err = "carousel".parse::<Screen>().unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("validation error:"));
    assert!(msg.contains("carousel"));
    assert!(msg.contains("decoration-items"));
}

#[test]
fn serde_names_match_slugs() {
    for screen in Screen::ALL {
        let json = serde_json::to_string(&screen).unwrap();
        assert_eq!(json, format!("\"{}\"", screen.slug()));
    }
}

#[test]
fn every_screen_renders_a_view_for_every_element() {
    for screen in Screen::ALL {
        let instance = screen.instantiate().unwrap();
        assert_eq!(instance.title(), screen.title());
        let rendered = instance.render(&portrait()).unwrap();
        assert_eq!(rendered.skipped, 0, "{screen}");
        assert!(rendered.cells().count() > 0, "{screen}");
        assert_eq!(
            rendered.cells().count(),
            instance.item_counts().iter().sum::<usize>(),
            "{screen}"
        );
    }
}

#[test]
fn grid_columns_follow_the_vertical_size_class() {
    let grid = grid::controller().unwrap();
    let tall = grid.resolve(&portrait());
    assert_eq!(tall.group_count(0), 51);
    assert_eq!(tall.content_size.height, 51.0 * 80.0);

    let short = grid.resolve(&LayoutEnvironment::phone_landscape());
    assert_eq!(short.group_count(0), 26);
    assert_eq!(short.content_size.height, 26.0 * 80.0);
}

#[test]
fn estimated_rows_grow_their_text_with_the_identifier() {
    assert_eq!(estimated_height::cell_text(0), "0 ".repeat(20));
    assert_eq!(estimated_height::cell_text(2).len(), "2 ".len() * 60);
    assert_eq!(
        estimated_height::cell_text(100).len(),
        "100 ".len() * 2_020
    );
    let huge = estimated_height::cell_text(u32::MAX);
    assert_eq!(huge.len(), format!("{} ", u32::MAX).len() * 2_020);

    let rendered = estimated_height::controller()
        .unwrap()
        .render(&portrait())
        .unwrap();
    assert!(rendered.cells().all(|c| c.attributes.estimated));
    let first = rendered.cells().next().unwrap();
    assert_eq!(first.view.text.as_deref(), Some("0 ".repeat(20).as_str()));
}

#[test]
fn nested_groups_consume_eight_items_per_group() {
    let group = nested_groups::root_group().unwrap();
    assert_eq!(group.leaf_count(), 8);
    let resolved = nested_groups::controller().unwrap().resolve(&portrait());
    assert_eq!(resolved.group_count(0), 13);
}

#[test]
fn sections_each_get_their_own_shape_and_a_titled_header() {
    let controller = sections::controller().unwrap();
    let rendered = controller.render(&portrait()).unwrap();

    assert_eq!(rendered.sections.len(), 3);
    assert_eq!(rendered.sections[0].group_count, 4);
    assert_eq!(rendered.sections[1].group_count, 18);
    assert_eq!(rendered.sections[2].group_count, 20);
    assert!(rendered.sections[0].orthogonal_scrolling.is_orthogonal());
    assert!(rendered.sections[1].orthogonal_scrolling.is_orthogonal());
    assert!(!rendered.sections[2].orthogonal_scrolling.is_orthogonal());
    assert_eq!(
        rendered.sections[1].frame.y0 - rendered.sections[0].frame.y1,
        crate::foundation::metrics::MEDIUM_INSET
    );

    let titles: Vec<_> = rendered
        .supplementaries(&SupplementaryKind::SectionHeader)
        .map(|h| h.view.text.clone().unwrap())
        .collect();
    assert_eq!(titles, ["Nested with scrolling", "Paging", "Just list"]);
    assert_eq!(
        rendered
            .supplementaries(&SupplementaryKind::SectionFooter)
            .count(),
        0
    );
}

#[test]
fn unmatched_kinds_resolve_to_no_view() {
    let none = sections::resolve(&SupplementaryKind::ItemBadge, sections::SectionId::List, None);
    assert!(none.is_none());
    let none = supplementary::resolve(&boundary::CUSTOM_KIND, MainSection::Main, Some(1));
    assert!(none.is_none());
    let custom = boundary::resolve(&boundary::CUSTOM_KIND, boundary::SectionId::First, None);
    assert_eq!(custom.unwrap().background, Color::Mint);
}

#[test]
fn boundary_items_appear_once_per_declaring_scope() {
    let rendered = boundary::controller()
        .unwrap()
        .render(&portrait())
        .unwrap();
    let count = |kind: &SupplementaryKind| rendered.supplementaries(kind).count();

    assert_eq!(count(&SupplementaryKind::Header), 1);
    assert_eq!(count(&SupplementaryKind::Footer), 1);
    assert_eq!(count(&SupplementaryKind::SectionHeader), 2);
    assert_eq!(count(&SupplementaryKind::SectionFooter), 2);
    assert_eq!(count(&boundary::CUSTOM_KIND), 2);

    let header = rendered
        .supplementaries(&SupplementaryKind::Header)
        .next()
        .unwrap();
    assert_eq!(header.view.text.as_deref(), Some("GLOBAL HEADER"));
    assert_eq!(header.attributes.frame.y0, 0.0);

    let footers: Vec<_> = rendered
        .supplementaries(&SupplementaryKind::SectionFooter)
        .map(|f| f.view.text.clone().unwrap())
        .collect();
    assert_eq!(footers, ["First footer", "Second footer"]);

    assert!(
        rendered
            .supplementaries(&SupplementaryKind::SectionHeader)
            .all(|h| h.attributes.pinned)
    );
    assert!(
        rendered
            .supplementaries(&boundary::CUSTOM_KIND)
            .all(|c| c.z_index() == 2)
    );
}

#[test]
fn badges_attach_to_every_item_and_group() {
    let rendered = supplementary::controller()
        .unwrap()
        .render(&portrait())
        .unwrap();
    assert_eq!(rendered.cells().count(), 100);
    assert_eq!(rendered.sections[0].group_count, 50);
    assert_eq!(
        rendered
            .supplementaries(&SupplementaryKind::ItemBadge)
            .count(),
        100
    );
    assert_eq!(
        rendered
            .supplementaries(&SupplementaryKind::GroupBadge)
            .count(),
        50
    );

    let first_row = rendered.cells().next().unwrap().attributes.frame.y0;
    let row: Vec<_> = rendered
        .cells()
        .filter(|cell| cell.attributes.frame.y0 == first_row)
        .collect();
    assert_eq!(row.len(), 2);
    assert!(row[0].attributes.frame.x1 <= row[1].attributes.frame.x0);
    assert!(row[1].attributes.frame.x1 > 390.0 / 2.0);
    let badge = rendered
        .supplementaries(&SupplementaryKind::ItemBadge)
        .next()
        .unwrap();
    assert_eq!(badge.view.text.as_deref(), Some("X"));
    assert_eq!(badge.view.style.background, Color::Pink);
}

#[test]
fn decoration_backgrounds_sit_inside_each_section() {
    let rendered = decoration::controller()
        .unwrap()
        .render(&portrait())
        .unwrap();
    let backgrounds: Vec<_> = rendered
        .decorations(&DecorationKind::SectionBackground)
        .collect();
    assert_eq!(backgrounds.len(), 2);

    // 390 wide, 32pt insets: groups are 326 wide and 163 tall.
    assert_eq!(
        backgrounds[0].attributes.frame,
        Rect::new(16.0, 16.0, 374.0, 211.0)
    );
    assert!(backgrounds.iter().all(|b| b.z_index() < 0));
    assert_eq!(backgrounds[0].view.style.background, Color::Red);

    assert_eq!(rendered.sections[0].group_count, 4);
    assert_eq!(rendered.sections[1].group_count, 10);
}

#[test]
fn resolved_supplementary_skips_the_registry_for_unhandled_kinds() {
    let registry = TemplateRegistry::new();
    let kind = SupplementaryKind::GroupBadge;
    let ctx = SupplementaryContext {
        kind: &kind,
        index_path: IndexPath::new(0, 0),
        section: &sections::SectionId::Paging,
        item: None,
    };
    let view = resolved_supplementary(&registry, ctx, sections::resolve).unwrap();
    assert!(view.is_none());

    let kind = SupplementaryKind::SectionHeader;
    let ctx = SupplementaryContext { kind: &kind, ..ctx };
    let err = resolved_supplementary(&registry, ctx, sections::resolve).unwrap_err();
    assert!(err.to_string().starts_with("registry error:"));
}

#[test]
fn catalog_lists_every_screen_and_opens_the_selected_one() {
    let catalog = catalog::controller().unwrap();
    let rendered = catalog.render(&portrait()).unwrap();
    let titles: Vec<_> = rendered
        .cells()
        .map(|c| c.view.text.clone().unwrap())
        .collect();
    let expected: Vec<_> = Screen::ALL.iter().map(|s| s.title().to_string()).collect();
    assert_eq!(titles, expected);
    assert!(rendered.cells().all(|c| c.view.template == "table-cell"));

    assert_eq!(
        catalog::screen_at(&catalog, IndexPath::new(0, 3)),
        Some(Screen::Sections)
    );
    let opened = catalog::select(&catalog, IndexPath::new(0, 3)).unwrap().unwrap();
    assert_eq!(opened.title(), sections::TITLE);
    assert!(
        catalog::select(&catalog, IndexPath::new(0, 7))
            .unwrap()
            .is_none()
    );
}
