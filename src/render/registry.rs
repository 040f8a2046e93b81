use std::collections::{BTreeSet, HashMap};

use crate::foundation::core::IndexPath;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::layout::kind::{DecorationKind, SupplementaryKind};
use crate::render::view::{SupplementaryViewModel, View, ViewStyle, render};

/// Reusable cell shapes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CellTemplate {
    /// Grid cell with a bordered, colored background.
    Collection,
    /// Plain list row.
    Table,
}

impl CellTemplate {
    pub fn name(self) -> &'static str {
        match self {
            Self::Collection => "collection-cell",
            Self::Table => "table-cell",
        }
    }

    pub fn style(self) -> ViewStyle {
        match self {
            Self::Collection => ViewStyle::collection_cell(),
            Self::Table => ViewStyle::table_cell(),
        }
    }
}

/// Reusable shapes for supplementary and decoration views.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewTemplate {
    /// Single-line label on a background chosen by its view model.
    Supplementary,
    /// Bordered, rounded background.
    Background,
}

impl ViewTemplate {
    pub fn name(self) -> &'static str {
        match self {
            Self::Supplementary => "supplementary-view",
            Self::Background => "background-view",
        }
    }

    pub fn style(self) -> ViewStyle {
        match self {
            Self::Supplementary => ViewStyle::supplementary(),
            Self::Background => ViewStyle::section_background(),
        }
    }
}

/// Templates registered for one collection surface, keyed by typed kind.
///
/// Every template must be registered before it is dequeued; dequeuing anything else is an error.
/// Registering a kind twice replaces the earlier template.
#[derive(Clone, Debug, Default)]
pub struct TemplateRegistry {
    cells: BTreeSet<CellTemplate>,
    supplementaries: HashMap<SupplementaryKind, ViewTemplate>,
    decorations: HashMap<DecorationKind, ViewTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_cell(&mut self, template: CellTemplate) {
        self.cells.insert(template);
    }

    pub fn register_supplementary(&mut self, kind: SupplementaryKind, template: ViewTemplate) {
        if let Some(previous) = self.supplementaries.insert(kind, template) {
            tracing::trace!(?previous, ?template, "supplementary template replaced");
        }
    }

    pub fn register_decoration(&mut self, kind: DecorationKind, template: ViewTemplate) {
        if let Some(previous) = self.decorations.insert(kind, template) {
            tracing::trace!(?previous, ?template, "decoration template replaced");
        }
    }

    pub fn has_cell(&self, template: CellTemplate) -> bool {
        self.cells.contains(&template)
    }

    pub fn has_supplementary(&self, kind: &SupplementaryKind) -> bool {
        self.supplementaries.contains_key(kind)
    }

    pub fn has_decoration(&self, kind: &DecorationKind) -> bool {
        self.decorations.contains_key(kind)
    }

    pub fn dequeue_cell(
        &self,
        template: CellTemplate,
        index_path: IndexPath,
    ) -> MosaicResult<CellHandle> {
        if !self.has_cell(template) {
            return Err(MosaicError::registry(format!(
                "cell template {} dequeued at {index_path} before registration",
                template.name()
            )));
        }
        Ok(CellHandle {
            template,
            index_path,
        })
    }

    pub fn dequeue_supplementary(
        &self,
        kind: &SupplementaryKind,
        index_path: IndexPath,
    ) -> MosaicResult<SupplementaryHandle> {
        let template = self.supplementaries.get(kind).copied().ok_or_else(|| {
            MosaicError::registry(format!(
                "supplementary kind {kind} dequeued at {index_path} before registration"
            ))
        })?;
        Ok(SupplementaryHandle {
            kind: kind.clone(),
            template,
            index_path,
        })
    }

    pub fn dequeue_decoration(
        &self,
        kind: &DecorationKind,
        index_path: IndexPath,
    ) -> MosaicResult<DecorationHandle> {
        let template = self.decorations.get(kind).copied().ok_or_else(|| {
            MosaicError::registry(format!(
                "decoration kind {kind} dequeued at {index_path} before registration"
            ))
        })?;
        Ok(DecorationHandle {
            kind: kind.clone(),
            template,
            index_path,
        })
    }
}

/// A dequeued cell. It can only be configured with cell content.
#[derive(Debug)]
pub struct CellHandle {
    template: CellTemplate,
    index_path: IndexPath,
}

impl CellHandle {
    pub fn template(&self) -> CellTemplate {
        self.template
    }

    pub fn index_path(&self) -> IndexPath {
        self.index_path
    }

    pub fn render(self, text: impl Into<String>) -> View {
        render(
            self.template.name(),
            self.template.style(),
            Some(text.into()),
        )
    }
}

/// A dequeued supplementary view. It can only be configured with a supplementary view model.
#[derive(Debug)]
pub struct SupplementaryHandle {
    kind: SupplementaryKind,
    template: ViewTemplate,
    index_path: IndexPath,
}

impl SupplementaryHandle {
    pub fn kind(&self) -> &SupplementaryKind {
        &self.kind
    }

    pub fn index_path(&self) -> IndexPath {
        self.index_path
    }

    pub fn render(self, model: &SupplementaryViewModel) -> View {
        let style = self.template.style().with_background(model.background);
        render(self.template.name(), style, Some(model.text.clone()))
    }
}

/// A dequeued decoration view. Decorations carry no content.
#[derive(Debug)]
pub struct DecorationHandle {
    kind: DecorationKind,
    template: ViewTemplate,
    index_path: IndexPath,
}

impl DecorationHandle {
    pub fn kind(&self) -> &DecorationKind {
        &self.kind
    }

    pub fn index_path(&self) -> IndexPath {
        self.index_path
    }

    pub fn render(self) -> View {
        render(self.template.name(), self.template.style(), None)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/registry.rs"]
mod tests;
