//! Mosaic describes scrollable grids and lists declaratively and measures them.
//!
//! - Build a [`CompositionalLayout`] from items, groups and sections, or load one from JSON
//! - Keep content in a [`Snapshot`] and apply it through a [`DiffableDataSource`] to get the
//!   minimal [`Changeset`] between two snapshots
//! - Register view templates in a [`TemplateRegistry`] and resolve every laid-out element to a
//!   [`View`]
//!
//! The [`screens`] module ships a catalog of demo screens built from these pieces.
#![forbid(unsafe_code)]

mod foundation;

/// Snapshots, diffing and the diffable data source.
pub mod data;
/// Layout description model and measurement pass.
pub mod layout;
/// View templates and rendered view descriptors.
pub mod render;
pub mod screens;

pub use crate::foundation::core::{Axis, DirectionalInsets, IndexPath, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{MosaicError, MosaicResult};
pub use crate::foundation::metrics;

pub use crate::data::diff::{ChangeSummary, Changeset, UpdateOp};
pub use crate::data::snapshot::{Identifier, Snapshot};
pub use crate::data::source::{DiffableDataSource, SupplementaryContext};
pub use crate::layout::dimension::{Dimension, LayoutSize};
pub use crate::layout::environment::{LayoutEnvironment, SizeClass};
pub use crate::layout::kind::{DecorationKind, SupplementaryKind};
pub use crate::layout::model::{CompositionalLayout, LayoutDocument, Section};
pub use crate::layout::solver::{LayoutAttributes, ResolvedLayout, resolve_layout};
pub use crate::render::registry::{CellTemplate, TemplateRegistry, ViewTemplate};
pub use crate::render::view::View;
pub use crate::screens::{DemoScreen, RenderedScreen, Screen};
