//! The demo catalog: one module per screen plus the list screen that opens them.
//!
//! Screens are picked through the [`Screen`] enum. Each variant maps to the constructor of its
//! controller; there is no lookup by name at runtime beyond parsing a [`Screen`] from its slug.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::data::snapshot::{Identifier, Snapshot};
use crate::data::source::SupplementaryContext;
use crate::foundation::core::IndexPath;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::layout::kind::SupplementaryKind;
use crate::render::registry::{CellTemplate, TemplateRegistry};
use crate::render::view::{SupplementaryViewModel, View};

pub mod boundary;
pub mod catalog;
pub mod controller;
pub mod decoration;
pub mod estimated_height;
pub mod grid;
pub mod nested_groups;
pub mod sections;
pub mod supplementary;

pub use controller::{DemoScreen, RenderedScreen, ScreenController};

/// Every demo screen of the catalog.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    EstimatedHeight,
    Grid,
    NestedGroups,
    Sections,
    BoundarySupplementaryItems,
    SupplementaryItems,
    DecorationItems,
}

impl Screen {
    /// Catalog order.
    pub const ALL: [Screen; 7] = [
        Screen::EstimatedHeight,
        Screen::Grid,
        Screen::NestedGroups,
        Screen::Sections,
        Screen::BoundarySupplementaryItems,
        Screen::SupplementaryItems,
        Screen::DecorationItems,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::EstimatedHeight => estimated_height::TITLE,
            Self::Grid => grid::TITLE,
            Self::NestedGroups => nested_groups::TITLE,
            Self::Sections => sections::TITLE,
            Self::BoundarySupplementaryItems => boundary::TITLE,
            Self::SupplementaryItems => supplementary::TITLE,
            Self::DecorationItems => decoration::TITLE,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::EstimatedHeight => "estimated-height",
            Self::Grid => "grid",
            Self::NestedGroups => "nested-groups",
            Self::Sections => "sections",
            Self::BoundarySupplementaryItems => "boundary-supplementary-items",
            Self::SupplementaryItems => "supplementary-items",
            Self::DecorationItems => "decoration-items",
        }
    }

    /// Build the screen's controller with its initial snapshot applied.
    pub fn instantiate(self) -> MosaicResult<Box<dyn DemoScreen>> {
        tracing::debug!(screen = self.slug(), "instantiating screen");
        Ok(match self {
            Self::EstimatedHeight => Box::new(estimated_height::controller()?),
            Self::Grid => Box::new(grid::controller()?),
            Self::NestedGroups => Box::new(nested_groups::controller()?),
            Self::Sections => Box::new(sections::controller()?),
            Self::BoundarySupplementaryItems => Box::new(boundary::controller()?),
            Self::SupplementaryItems => Box::new(supplementary::controller()?),
            Self::DecorationItems => Box::new(decoration::controller()?),
        })
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Screen {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.slug() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|screen| screen.slug()).collect();
                MosaicError::validation(format!(
                    "unknown screen '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

/// Section identifier of single-section screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MainSection {
    Main,
}

/// Repeat count fixed at compile time.
pub(crate) const fn repeat(count: usize) -> NonZeroUsize {
    match NonZeroUsize::new(count) {
        Some(count) => count,
        None => panic!("repeat count must be positive"),
    }
}

/// One `Main` section holding `items`.
pub(crate) fn main_snapshot(
    items: impl IntoIterator<Item = u32>,
) -> MosaicResult<Snapshot<MainSection, u32>> {
    let mut snapshot = Snapshot::new();
    snapshot.append_sections([MainSection::Main])?;
    snapshot.append_items(items, None)?;
    Ok(snapshot)
}

/// Registry with the collection cell, the template every demo grid uses.
pub(crate) fn collection_registry() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    registry.register_cell(CellTemplate::Collection);
    registry
}

/// Collection cell showing the item identifier.
pub(crate) fn number_cell(
    registry: &TemplateRegistry,
    index_path: IndexPath,
    item: &u32,
) -> MosaicResult<View> {
    Ok(registry
        .dequeue_cell(CellTemplate::Collection, index_path)?
        .render(item.to_string()))
}

/// Pure resolution of a supplementary element to its view model.
pub(crate) type Resolver<S> =
    fn(&SupplementaryKind, S, Option<u32>) -> Option<SupplementaryViewModel>;

/// Supplementary provider: resolve first, dequeue only what resolved.
pub(crate) fn resolved_supplementary<S: Identifier + Copy>(
    registry: &TemplateRegistry,
    ctx: SupplementaryContext<'_, S, u32>,
    resolve: Resolver<S>,
) -> MosaicResult<Option<View>> {
    let Some(model) = resolve(ctx.kind, *ctx.section, ctx.item.copied()) else {
        tracing::trace!(kind = %ctx.kind, index_path = %ctx.index_path, "kind not handled");
        return Ok(None);
    };
    Ok(Some(
        registry
            .dequeue_supplementary(ctx.kind, ctx.index_path)?
            .render(&model),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/screens/screen.rs"]
mod tests;
