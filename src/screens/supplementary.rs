use std::num::NonZeroUsize;

use crate::data::snapshot::Snapshot;
use crate::data::source::DiffableDataSource;
use crate::foundation::core::DirectionalInsets;
use crate::foundation::error::MosaicResult;
use crate::foundation::metrics;
use crate::layout::dimension::{Dimension, LayoutSize};
use crate::layout::dsl::{GroupBuilder, ItemBuilder, LayoutBuilder, SectionBuilder};
use crate::layout::kind::SupplementaryKind;
use crate::layout::model::{CompositionalLayout, ContainerAnchor, RectAlignment, SupplementaryItem};
use crate::render::registry::ViewTemplate;
use crate::render::view::{Color, SupplementaryViewModel};
use crate::screens::controller::ScreenController;
use crate::screens::{
    MainSection, collection_registry, main_snapshot, number_cell, repeat, resolved_supplementary,
};

pub const TITLE: &str = "Supplementary items";

const ITEMS_PER_ROW: NonZeroUsize = repeat(2);

fn badge_size() -> LayoutSize {
    LayoutSize::new(Dimension::estimated(100.0), Dimension::estimated(30.0))
}

/// Rows of two half-width items, each with a badge straddling its top trailing corner, and a
/// badge near the bottom of every row.
pub fn layout() -> MosaicResult<CompositionalLayout> {
    let item_badge = SupplementaryItem::new(
        badge_size(),
        SupplementaryKind::ItemBadge,
        ContainerAnchor::with_offset(RectAlignment::TopTrailing, 0.5, -0.5),
    );
    let item = ItemBuilder::new(LayoutSize::new(
        Dimension::fractional_width(0.5)?,
        Dimension::fractional_height(0.7)?,
    ))
    .content_insets(DirectionalInsets::uniform(metrics::SMALL_INSET))
    .supplementary(item_badge)
    .build();

    let group_badge = SupplementaryItem::new(
        badge_size(),
        SupplementaryKind::GroupBadge,
        ContainerAnchor::with_offset(RectAlignment::Bottom, 0.0, -0.4),
    );
    let group = GroupBuilder::horizontal(LayoutSize::new(
        Dimension::full_width(),
        Dimension::fractional_width(0.5)?,
    ))
    .repeating(item, ITEMS_PER_ROW)
    .supplementary(group_badge)
    .build();

    let section = SectionBuilder::new(group)
        .content_insets(DirectionalInsets::uniform(metrics::LARGE_INSET))
        .build();
    Ok(LayoutBuilder::new(section).build())
}

pub fn snapshot() -> MosaicResult<Snapshot<MainSection, u32>> {
    main_snapshot(0..100)
}

pub fn resolve(
    kind: &SupplementaryKind,
    _section: MainSection,
    _item: Option<u32>,
) -> Option<SupplementaryViewModel> {
    match kind {
        SupplementaryKind::ItemBadge => Some(SupplementaryViewModel::new("X", Color::Pink)),
        SupplementaryKind::GroupBadge => {
            Some(SupplementaryViewModel::new("GROUP BADGE", Color::Mint))
        }
        _ => None,
    }
}

pub fn controller() -> MosaicResult<ScreenController<MainSection, u32>> {
    let mut registry = collection_registry();
    registry.register_supplementary(SupplementaryKind::ItemBadge, ViewTemplate::Supplementary);
    registry.register_supplementary(SupplementaryKind::GroupBadge, ViewTemplate::Supplementary);

    let data_source =
        DiffableDataSource::new(number_cell).with_supplementary_provider(|registry, ctx| {
            resolved_supplementary(registry, ctx, resolve)
        });
    let mut controller = ScreenController::new(TITLE, layout()?, registry, data_source);
    controller.apply(snapshot()?, false);
    Ok(controller)
}
