use std::num::NonZeroUsize;

use crate::data::snapshot::Snapshot;
use crate::data::source::DiffableDataSource;
use crate::foundation::error::MosaicResult;
use crate::layout::dimension::{Dimension, LayoutSize};
use crate::layout::dsl::{GroupBuilder, ItemBuilder, LayoutBuilder, SectionBuilder};
use crate::layout::environment::SizeClass;
use crate::layout::model::CompositionalLayout;
use crate::screens::controller::ScreenController;
use crate::screens::{MainSection, collection_registry, main_snapshot, number_cell, repeat};

pub const TITLE: &str = "Grid";

const ROW_HEIGHT: f64 = 80.0;
const TALL_COLUMNS: NonZeroUsize = repeat(2);
const SHORT_COLUMNS: NonZeroUsize = repeat(4);

/// Rows of 80pt. Two columns when the vertical size class is regular, four otherwise.
pub fn layout() -> CompositionalLayout {
    LayoutBuilder::dynamic(|_, env| {
        let columns = match env.vertical_size_class {
            SizeClass::Regular => TALL_COLUMNS,
            SizeClass::Compact => SHORT_COLUMNS,
        };
        let item = ItemBuilder::new(LayoutSize::full()).build();
        let group = GroupBuilder::horizontal(LayoutSize::new(
            Dimension::full_width(),
            Dimension::absolute(ROW_HEIGHT),
        ))
        .repeating(item, columns)
        .build();
        Some(SectionBuilder::new(group).build())
    })
    .build()
}

pub fn snapshot() -> MosaicResult<Snapshot<MainSection, u32>> {
    main_snapshot(0..=100)
}

pub fn controller() -> MosaicResult<ScreenController<MainSection, u32>> {
    let mut controller = ScreenController::new(
        TITLE,
        layout(),
        collection_registry(),
        DiffableDataSource::new(number_cell),
    );
    controller.apply(snapshot()?, false);
    Ok(controller)
}
