use std::num::NonZeroUsize;

use crate::data::snapshot::Snapshot;
use crate::data::source::DiffableDataSource;
use crate::foundation::core::DirectionalInsets;
use crate::foundation::error::MosaicResult;
use crate::foundation::metrics;
use crate::layout::dimension::{Dimension, LayoutSize};
use crate::layout::dsl::{GroupBuilder, ItemBuilder, LayoutBuilder, SectionBuilder};
use crate::layout::kind::DecorationKind;
use crate::layout::model::{CompositionalLayout, DecorationItem, OrthogonalScrolling, Section};
use crate::render::registry::ViewTemplate;
use crate::screens::controller::ScreenController;
use crate::screens::{collection_registry, number_cell, repeat};

pub const TITLE: &str = "Decoration items";

const SCROLLING_COLUMNS: NonZeroUsize = repeat(3);
const LIST_COLUMNS: NonZeroUsize = repeat(2);
const LIST_ROW_HEIGHT: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Scrolling,
    List,
}

fn background() -> DecorationItem {
    DecorationItem::background(DecorationKind::SectionBackground)
        .content_insets(DirectionalInsets::uniform(metrics::DEFAULT_INSET))
}

fn decorated(section: SectionBuilder) -> Section {
    section
        .content_insets(DirectionalInsets::uniform(metrics::LARGE_INSET))
        .decoration(background())
        .build()
}

fn scrolling_section() -> MosaicResult<Section> {
    let item = ItemBuilder::new(LayoutSize::full()).build();
    let group = GroupBuilder::horizontal(LayoutSize::new(
        Dimension::full_width(),
        Dimension::fractional_width(0.5)?,
    ))
    .repeating(item, SCROLLING_COLUMNS)
    .inter_item_spacing(metrics::DEFAULT_INSET)
    .build();
    Ok(decorated(
        SectionBuilder::new(group).orthogonal_scrolling(OrthogonalScrolling::Continuous),
    ))
}

fn list_section() -> Section {
    let item = ItemBuilder::new(LayoutSize::full()).build();
    let group = GroupBuilder::horizontal(LayoutSize::new(
        Dimension::full_width(),
        Dimension::absolute(LIST_ROW_HEIGHT),
    ))
    .repeating(item, LIST_COLUMNS)
    .build();
    decorated(SectionBuilder::new(group))
}

/// Two inset sections, each drawn over a rounded background inset from the section frame.
pub fn layout() -> MosaicResult<CompositionalLayout> {
    let shapes = [scrolling_section()?, list_section()];
    Ok(LayoutBuilder::dynamic(move |index, _| shapes.get(index).cloned()).build())
}

pub fn snapshot() -> MosaicResult<Snapshot<SectionId, u32>> {
    let mut snapshot = Snapshot::new();
    snapshot.append_sections([SectionId::Scrolling, SectionId::List])?;
    snapshot.append_items(0..=10, Some(&SectionId::Scrolling))?;
    snapshot.append_items(11..=30, Some(&SectionId::List))?;
    Ok(snapshot)
}

pub fn controller() -> MosaicResult<ScreenController<SectionId, u32>> {
    let mut registry = collection_registry();
    registry.register_decoration(DecorationKind::SectionBackground, ViewTemplate::Background);

    let mut controller = ScreenController::new(
        TITLE,
        layout()?,
        registry,
        DiffableDataSource::new(number_cell),
    );
    controller.apply(snapshot()?, false);
    Ok(controller)
}
