use crate::data::diff::{Changeset, diff};
use crate::data::snapshot::{Identifier, Snapshot};
use crate::foundation::core::IndexPath;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::layout::kind::SupplementaryKind;
use crate::render::registry::TemplateRegistry;

/// Produces the view of one cell from its item identifier.
pub type CellProvider<I, V> = dyn Fn(&TemplateRegistry, IndexPath, &I) -> MosaicResult<V>;

/// Produces the view of one supplementary element, or `None` when the kind is not handled.
pub type SupplementaryProvider<S, I, V> =
    dyn Fn(&TemplateRegistry, SupplementaryContext<'_, S, I>) -> MosaicResult<Option<V>>;

/// Identifiers behind a supplementary element's index path.
#[derive(Debug)]
pub struct SupplementaryContext<'a, S, I> {
    pub kind: &'a SupplementaryKind,
    pub index_path: IndexPath,
    pub section: &'a S,
    /// `None` for elements of an empty section.
    pub item: Option<&'a I>,
}

impl<S, I> Clone for SupplementaryContext<'_, S, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, I> Copy for SupplementaryContext<'_, S, I> {}

/// Binds a snapshot to the providers that turn its identifiers into views.
pub struct DiffableDataSource<S, I, V> {
    snapshot: Snapshot<S, I>,
    cell_provider: Box<CellProvider<I, V>>,
    supplementary_provider: Option<Box<SupplementaryProvider<S, I, V>>>,
}

impl<S: Identifier, I: Identifier, V> DiffableDataSource<S, I, V> {
    pub fn new<F>(cell_provider: F) -> Self
    where
        F: Fn(&TemplateRegistry, IndexPath, &I) -> MosaicResult<V> + 'static,
    {
        Self {
            snapshot: Snapshot::new(),
            cell_provider: Box::new(cell_provider),
            supplementary_provider: None,
        }
    }

    pub fn with_supplementary_provider<F>(mut self, provider: F) -> Self
    where
        F: Fn(&TemplateRegistry, SupplementaryContext<'_, S, I>) -> MosaicResult<Option<V>>
            + 'static,
    {
        self.set_supplementary_provider(provider);
        self
    }

    pub fn set_supplementary_provider<F>(&mut self, provider: F)
    where
        F: Fn(&TemplateRegistry, SupplementaryContext<'_, S, I>) -> MosaicResult<Option<V>>
            + 'static,
    {
        self.supplementary_provider = Some(Box::new(provider));
    }

    /// Replace the current snapshot with `snapshot`.
    ///
    /// Returns the edit script from the previous snapshot. Reload requests carried by `snapshot`
    /// always produce reloads and are then consumed. Applying an unchanged snapshot is therefore
    /// a no-op only when it carries no reload requests; copies from [`Self::snapshot`] carry
    /// none.
    #[tracing::instrument(skip(self, snapshot), fields(items = snapshot.number_of_items()))]
    pub fn apply(&mut self, mut snapshot: Snapshot<S, I>, animated: bool) -> Changeset {
        let operations = diff(&self.snapshot, &snapshot);
        snapshot.clear_reloads();
        self.snapshot = snapshot;
        tracing::debug!(operations = operations.len(), animated, "snapshot applied");
        Changeset {
            operations,
            animated,
        }
    }

    /// Copy of the current snapshot, to be edited and applied again.
    pub fn snapshot(&self) -> Snapshot<S, I> {
        self.snapshot.clone()
    }

    pub fn current(&self) -> &Snapshot<S, I> {
        &self.snapshot
    }

    pub fn item_identifier(&self, index_path: IndexPath) -> Option<&I> {
        self.snapshot.item_at(index_path)
    }

    pub fn index_path(&self, item: &I) -> Option<IndexPath> {
        self.snapshot.index_path_of(item)
    }

    pub fn section_identifier(&self, section: usize) -> Option<&S> {
        self.snapshot.section_at(section)
    }

    /// Item counts of every section, in order.
    pub fn item_counts(&self) -> Vec<usize> {
        self.snapshot
            .section_identifiers()
            .map(|s| self.snapshot.items_in_section(s).map_or(0, <[I]>::len))
            .collect()
    }

    pub fn cell(&self, registry: &TemplateRegistry, index_path: IndexPath) -> MosaicResult<V> {
        let item = self
            .item_identifier(index_path)
            .ok_or_else(|| MosaicError::snapshot(format!("no item at {index_path}")))?;
        (self.cell_provider)(registry, index_path, item)
    }

    /// View for a supplementary element, resolved through the supplementary provider.
    ///
    /// Without a provider, or for an index path outside the snapshot, there is no view.
    pub fn supplementary(
        &self,
        registry: &TemplateRegistry,
        kind: &SupplementaryKind,
        index_path: IndexPath,
    ) -> MosaicResult<Option<V>> {
        let Some(provider) = &self.supplementary_provider else {
            return Ok(None);
        };
        let Some(section) = self.snapshot.section_at(index_path.section) else {
            tracing::trace!(%kind, %index_path, "no section for supplementary element");
            return Ok(None);
        };
        let context = SupplementaryContext {
            kind,
            index_path,
            section,
            item: self.snapshot.item_at(index_path),
        };
        provider(registry, context)
    }
}

impl<S: Identifier, I: Identifier, V> std::fmt::Debug for DiffableDataSource<S, I, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffableDataSource")
            .field("snapshot", &self.snapshot)
            .field("has_supplementary_provider", &self.supplementary_provider.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/source.rs"]
mod tests;
