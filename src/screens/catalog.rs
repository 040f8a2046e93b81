//! The list screen: one row per demo, selecting a row opens that demo.

use crate::data::snapshot::Snapshot;
use crate::data::source::DiffableDataSource;
use crate::foundation::core::IndexPath;
use crate::foundation::error::MosaicResult;
use crate::layout::dsl::LayoutBuilder;
use crate::layout::model::{CompositionalLayout, ListAppearance, Section};
use crate::render::registry::{CellTemplate, TemplateRegistry};
use crate::render::view::View;
use crate::screens::controller::{DemoScreen, ScreenController};
use crate::screens::{MainSection, Screen};

pub const TITLE: &str = "List";

pub type CatalogController = ScreenController<MainSection, Screen>;

pub fn layout() -> CompositionalLayout {
    LayoutBuilder::new(Section::list(ListAppearance::Plain)).build()
}

/// Every screen, in catalog order.
pub fn snapshot() -> MosaicResult<Snapshot<MainSection, Screen>> {
    let mut snapshot = Snapshot::new();
    snapshot.append_sections([MainSection::Main])?;
    snapshot.append_items(Screen::ALL, None)?;
    Ok(snapshot)
}

fn title_cell(
    registry: &TemplateRegistry,
    index_path: IndexPath,
    screen: &Screen,
) -> MosaicResult<View> {
    Ok(registry
        .dequeue_cell(CellTemplate::Table, index_path)?
        .render(screen.title()))
}

pub fn controller() -> MosaicResult<CatalogController> {
    let mut registry = TemplateRegistry::new();
    registry.register_cell(CellTemplate::Table);

    let mut controller = ScreenController::new(
        TITLE,
        layout(),
        registry,
        DiffableDataSource::new(title_cell),
    );
    controller.apply(snapshot()?, false);
    Ok(controller)
}

/// Screen listed at `index_path`, if any.
pub fn screen_at(controller: &CatalogController, index_path: IndexPath) -> Option<Screen> {
    controller.data_source().item_identifier(index_path).copied()
}

/// Open the screen listed at `index_path`. Selecting outside the list opens nothing.
pub fn select(
    controller: &CatalogController,
    index_path: IndexPath,
) -> MosaicResult<Option<Box<dyn DemoScreen>>> {
    let Some(screen) = screen_at(controller, index_path) else {
        tracing::trace!(index_path = %index_path, "selection outside the catalog");
        return Ok(None);
    };
    screen.instantiate().map(Some)
}
