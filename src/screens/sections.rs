use std::num::NonZeroUsize;

use crate::data::snapshot::Snapshot;
use crate::data::source::DiffableDataSource;
use crate::foundation::error::MosaicResult;
use crate::foundation::metrics;
use crate::layout::dimension::{Dimension, LayoutSize};
use crate::layout::dsl::{GroupBuilder, ItemBuilder, LayoutBuilder, SectionBuilder};
use crate::layout::kind::SupplementaryKind;
use crate::layout::model::{
    BoundarySupplementaryItem, CompositionalLayout, OrthogonalScrolling, RectAlignment, Section,
};
use crate::render::registry::ViewTemplate;
use crate::render::view::{Color, SupplementaryViewModel};
use crate::screens::controller::ScreenController;
use crate::screens::{collection_registry, number_cell, repeat, resolved_supplementary};

pub const TITLE: &str = "Sections";

const STACKED_SMALL_ITEMS: NonZeroUsize = repeat(2);
const PAGE_ROWS: NonZeroUsize = repeat(5);
const PAGE_ROW_HEIGHT: f64 = 44.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Scrolling,
    Paging,
    List,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Scrolling, SectionId::Paging, SectionId::List];

    pub fn title(self) -> &'static str {
        match self {
            Self::Scrolling => "Nested with scrolling",
            Self::Paging => "Paging",
            Self::List => "Just list",
        }
    }
}

fn header() -> BoundarySupplementaryItem {
    BoundarySupplementaryItem::new(
        LayoutSize::new(Dimension::full_width(), Dimension::estimated(56.0)),
        SupplementaryKind::SectionHeader,
        RectAlignment::Top,
    )
}

/// Large item beside two stacked ones, scrolling sideways.
fn scrolling_section() -> MosaicResult<Section> {
    let half_width = Dimension::fractional_width(0.5)?;
    let large = ItemBuilder::new(LayoutSize::new(half_width, Dimension::full_height())).build();
    let small = ItemBuilder::new(LayoutSize::full()).build();
    let stack = GroupBuilder::vertical(LayoutSize::new(half_width, Dimension::full_height()))
        .repeating(small, STACKED_SMALL_ITEMS)
        .build();
    let group = GroupBuilder::horizontal(LayoutSize::new(Dimension::full_width(), half_width))
        .subitem(large)
        .subitem(stack)
        .build();
    Ok(SectionBuilder::new(group)
        .orthogonal_scrolling(OrthogonalScrolling::ContinuousLeadingEdge)
        .boundary_item(header())
        .build())
}

/// Pages of five fixed-height rows.
fn paging_section() -> MosaicResult<Section> {
    let item = ItemBuilder::new(LayoutSize::new(
        Dimension::full_width(),
        Dimension::absolute(PAGE_ROW_HEIGHT),
    ))
    .build();
    let group = GroupBuilder::vertical(LayoutSize::new(
        Dimension::fractional_width(0.9)?,
        Dimension::fractional_width(0.5)?,
    ))
    .repeating(item, PAGE_ROWS)
    .build();
    Ok(SectionBuilder::new(group)
        .orthogonal_scrolling(OrthogonalScrolling::GroupPaging)
        .boundary_item(header())
        .build())
}

/// One item per row, rows a third of the width tall.
fn list_section() -> MosaicResult<Section> {
    let item = ItemBuilder::new(LayoutSize::full()).build();
    let group = GroupBuilder::horizontal(LayoutSize::new(
        Dimension::full_width(),
        Dimension::fractional_width(0.3)?,
    ))
    .subitem(item)
    .build();
    Ok(SectionBuilder::new(group).boundary_item(header()).build())
}

/// A different section shape per section index; indexes past the last shape have no layout.
pub fn layout() -> MosaicResult<CompositionalLayout> {
    let shapes = [scrolling_section()?, paging_section()?, list_section()?];
    Ok(LayoutBuilder::dynamic(move |index, _| shapes.get(index).cloned())
        .inter_section_spacing(metrics::MEDIUM_INSET)
        .build())
}

pub fn snapshot() -> MosaicResult<Snapshot<SectionId, u32>> {
    let mut snapshot = Snapshot::new();
    snapshot.append_sections(SectionId::ALL)?;
    snapshot.append_items(0..=10, Some(&SectionId::Scrolling))?;
    snapshot.append_items(11..=100, Some(&SectionId::Paging))?;
    snapshot.append_items(101..=120, Some(&SectionId::List))?;
    Ok(snapshot)
}

/// Section headers show the section title; nothing else has a view.
pub fn resolve(
    kind: &SupplementaryKind,
    section: SectionId,
    _item: Option<u32>,
) -> Option<SupplementaryViewModel> {
    match kind {
        SupplementaryKind::SectionHeader => {
            Some(SupplementaryViewModel::new(section.title(), Color::Clear))
        }
        _ => None,
    }
}

pub fn controller() -> MosaicResult<ScreenController<SectionId, u32>> {
    let mut registry = collection_registry();
    registry.register_supplementary(SupplementaryKind::SectionHeader, ViewTemplate::Supplementary);
    registry.register_supplementary(SupplementaryKind::SectionFooter, ViewTemplate::Supplementary);

    let data_source =
        DiffableDataSource::new(number_cell).with_supplementary_provider(|registry, ctx| {
            resolved_supplementary(registry, ctx, resolve)
        });
    let mut controller = ScreenController::new(TITLE, layout()?, registry, data_source);
    controller.apply(snapshot()?, false);
    Ok(controller)
}
