use crate::data::snapshot::Snapshot;
use crate::data::source::DiffableDataSource;
use crate::foundation::core::IndexPath;
use crate::foundation::error::MosaicResult;
use crate::layout::dimension::{Dimension, LayoutSize};
use crate::layout::dsl::{GroupBuilder, ItemBuilder, LayoutBuilder, SectionBuilder};
use crate::layout::model::CompositionalLayout;
use crate::render::registry::{CellTemplate, TemplateRegistry};
use crate::render::view::View;
use crate::screens::controller::ScreenController;
use crate::screens::{MainSection, collection_registry, main_snapshot};

pub const TITLE: &str = "Estimated height";

const ESTIMATED_ROW_HEIGHT: f64 = 50.0;

/// Full-width rows whose height is only estimated.
pub fn layout() -> CompositionalLayout {
    let size = LayoutSize::new(
        Dimension::full_width(),
        Dimension::estimated(ESTIMATED_ROW_HEIGHT),
    );
    let item = ItemBuilder::new(size).build();
    let group = GroupBuilder::vertical(size).subitem(item).build();
    LayoutBuilder::new(SectionBuilder::new(group).build()).build()
}

/// Repeats of the label per step of the identifier.
const REPEATS_PER_ID: usize = 20;
/// The longest text, reached by the last demo row.
const MAX_REPEATS: usize = 101 * REPEATS_PER_ID;

/// `"{id} "` repeated `(id + 1) * 20` times, capped at the length of row 100, so later rows
/// need more room.
pub fn cell_text(item: u32) -> String {
    let repeats = (item as usize)
        .saturating_add(1)
        .saturating_mul(REPEATS_PER_ID)
        .min(MAX_REPEATS);
    format!("{item} ").repeat(repeats)
}

fn cell(registry: &TemplateRegistry, index_path: IndexPath, item: &u32) -> MosaicResult<View> {
    Ok(registry
        .dequeue_cell(CellTemplate::Collection, index_path)?
        .render(cell_text(*item)))
}

pub fn snapshot() -> MosaicResult<Snapshot<MainSection, u32>> {
    main_snapshot(0..=100)
}

pub fn controller() -> MosaicResult<ScreenController<MainSection, u32>> {
    let mut controller = ScreenController::new(
        TITLE,
        layout(),
        collection_registry(),
        DiffableDataSource::new(cell),
    );
    controller.apply(snapshot()?, false);
    Ok(controller)
}
