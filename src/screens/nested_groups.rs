use std::num::NonZeroUsize;

use crate::data::snapshot::Snapshot;
use crate::data::source::DiffableDataSource;
use crate::foundation::error::MosaicResult;
use crate::layout::dimension::{Dimension, LayoutSize};
use crate::layout::dsl::{GroupBuilder, ItemBuilder, LayoutBuilder, SectionBuilder};
use crate::layout::model::{CompositionalLayout, Group};
use crate::screens::controller::ScreenController;
use crate::screens::{MainSection, collection_registry, main_snapshot, number_cell, repeat};

pub const TITLE: &str = "Nested groups";

const STACKED_SMALL_ITEMS: NonZeroUsize = repeat(2);
const BOTTOM_ROW_ITEMS: NonZeroUsize = repeat(5);

fn fractions(width: f64, height: f64) -> MosaicResult<LayoutSize> {
    Ok(LayoutSize::new(
        Dimension::fractional_width(width)?,
        Dimension::fractional_height(height)?,
    ))
}

/// Top row: one large item beside two stacked small ones. Bottom row: five equal items.
pub fn root_group() -> MosaicResult<Group> {
    let large = ItemBuilder::new(fractions(0.5, 1.0)?).build();
    let small = ItemBuilder::new(fractions(1.0, 0.5)?).build();
    let small_stack = GroupBuilder::vertical(fractions(0.5, 1.0)?)
        .repeating(small, STACKED_SMALL_ITEMS)
        .build();
    let top = GroupBuilder::horizontal(fractions(1.0, 0.7)?)
        .subitem(large)
        .subitem(small_stack)
        .build();
    let bottom = GroupBuilder::horizontal(fractions(1.0, 0.3)?)
        .repeating(ItemBuilder::new(LayoutSize::full()).build(), BOTTOM_ROW_ITEMS)
        .build();
    Ok(GroupBuilder::vertical(LayoutSize::new(
        Dimension::full_width(),
        Dimension::fractional_width(0.5)?,
    ))
    .subitem(top)
    .subitem(bottom)
    .build())
}

pub fn layout() -> MosaicResult<CompositionalLayout> {
    Ok(LayoutBuilder::new(SectionBuilder::new(root_group()?).build()).build())
}

pub fn snapshot() -> MosaicResult<Snapshot<MainSection, u32>> {
    main_snapshot(0..=100)
}

pub fn controller() -> MosaicResult<ScreenController<MainSection, u32>> {
    let mut controller = ScreenController::new(
        TITLE,
        layout()?,
        collection_registry(),
        DiffableDataSource::new(number_cell),
    );
    controller.apply(snapshot()?, false);
    Ok(controller)
}
