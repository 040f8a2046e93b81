use std::num::NonZeroUsize;

use crate::data::snapshot::Snapshot;
use crate::data::source::DiffableDataSource;
use crate::foundation::error::MosaicResult;
use crate::layout::dimension::{Dimension, LayoutSize};
use crate::layout::dsl::{GroupBuilder, ItemBuilder, LayoutBuilder, SectionBuilder};
use crate::layout::kind::SupplementaryKind;
use crate::layout::model::{BoundarySupplementaryItem, CompositionalLayout, RectAlignment};
use crate::render::registry::ViewTemplate;
use crate::render::view::{Color, SupplementaryViewModel};
use crate::screens::controller::ScreenController;
use crate::screens::{collection_registry, number_cell, repeat, resolved_supplementary};

pub const TITLE: &str = "Boundary supplementary items";

/// Application-defined kind pinned to the top trailing corner of every section.
pub const CUSTOM_KIND: SupplementaryKind = SupplementaryKind::custom("CustomKind");

const COLUMNS: NonZeroUsize = repeat(2);
const ROW_HEIGHT: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    First,
    Second,
}

impl SectionId {
    pub fn header(self) -> &'static str {
        match self {
            Self::First => "First header",
            Self::Second => "Second header",
        }
    }

    pub fn footer(self) -> &'static str {
        match self {
            Self::First => "First footer",
            Self::Second => "Second footer",
        }
    }
}

fn estimated_label() -> LayoutSize {
    LayoutSize::new(Dimension::estimated(150.0), Dimension::estimated(56.0))
}

/// Global header and footer around sections that each carry a pinned header, a footer and a
/// custom element above their top trailing corner.
pub fn layout() -> CompositionalLayout {
    let item = ItemBuilder::new(LayoutSize::full()).build();
    let group = GroupBuilder::horizontal(LayoutSize::new(
        Dimension::full_width(),
        Dimension::absolute(ROW_HEIGHT),
    ))
    .repeating(item, COLUMNS)
    .build();

    let section_header = BoundarySupplementaryItem::new(
        LayoutSize::new(Dimension::full_width(), Dimension::estimated(56.0)),
        SupplementaryKind::SectionHeader,
        RectAlignment::Top,
    )
    .pinned();
    let section_footer = BoundarySupplementaryItem::new(
        estimated_label(),
        SupplementaryKind::SectionFooter,
        RectAlignment::Bottom,
    );
    let custom = BoundarySupplementaryItem::new(estimated_label(), CUSTOM_KIND, RectAlignment::TopTrailing)
        .z_index(2);
    let section = SectionBuilder::new(group)
        .boundary_item(section_header)
        .boundary_item(section_footer)
        .boundary_item(custom)
        .build();

    LayoutBuilder::new(section)
        .boundary_item(BoundarySupplementaryItem::new(
            estimated_label(),
            SupplementaryKind::Header,
            RectAlignment::Top,
        ))
        .boundary_item(BoundarySupplementaryItem::new(
            estimated_label(),
            SupplementaryKind::Footer,
            RectAlignment::Bottom,
        ))
        .build()
}

pub fn snapshot() -> MosaicResult<Snapshot<SectionId, u32>> {
    let mut snapshot = Snapshot::new();
    snapshot.append_sections([SectionId::First, SectionId::Second])?;
    snapshot.append_items(0..10, Some(&SectionId::First))?;
    snapshot.append_items(11..=40, Some(&SectionId::Second))?;
    Ok(snapshot)
}

/// View model for each boundary kind this screen declares. Other kinds have no view.
pub fn resolve(
    kind: &SupplementaryKind,
    section: SectionId,
    _item: Option<u32>,
) -> Option<SupplementaryViewModel> {
    let model = match kind {
        SupplementaryKind::SectionHeader => {
            SupplementaryViewModel::new(section.header(), Color::Yellow)
        }
        SupplementaryKind::SectionFooter => {
            SupplementaryViewModel::new(section.footer(), Color::Brown)
        }
        SupplementaryKind::Header => SupplementaryViewModel::new("GLOBAL HEADER", Color::Red),
        SupplementaryKind::Footer => SupplementaryViewModel::new("GLOBAL FOOTER", Color::Cyan),
        k if *k == CUSTOM_KIND => SupplementaryViewModel::new("CUSTOM", Color::Mint),
        _ => return None,
    };
    Some(model)
}

pub fn controller() -> MosaicResult<ScreenController<SectionId, u32>> {
    let mut registry = collection_registry();
    for kind in [
        SupplementaryKind::Header,
        SupplementaryKind::Footer,
        SupplementaryKind::SectionHeader,
        SupplementaryKind::SectionFooter,
        CUSTOM_KIND,
    ] {
        registry.register_supplementary(kind, ViewTemplate::Supplementary);
    }

    let data_source =
        DiffableDataSource::new(number_cell).with_supplementary_provider(|registry, ctx| {
            resolved_supplementary(registry, ctx, resolve)
        });
    let mut controller = ScreenController::new(TITLE, layout(), registry, data_source);
    controller.apply(snapshot()?, false);
    Ok(controller)
}
