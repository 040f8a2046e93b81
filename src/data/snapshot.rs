use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::foundation::core::IndexPath;
use crate::foundation::error::{MosaicError, MosaicResult};

/// Requirements on section and item identifiers.
pub trait Identifier: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Identifier for T {}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SectionEntry<S, I> {
    id: S,
    items: Vec<I>,
}

/// Ordered sections, each holding ordered item identifiers.
///
/// Section identifiers are unique among sections and item identifiers unique among all items.
/// Every mutation checks its input first and leaves the snapshot untouched when it fails.
#[derive(Clone, Debug)]
pub struct Snapshot<S, I> {
    sections: Vec<SectionEntry<S, I>>,
    owners: HashMap<I, S>,
    reloaded: Vec<I>,
}

impl<S, I> Default for Snapshot<S, I> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            owners: HashMap::new(),
            reloaded: Vec::new(),
        }
    }
}

impl<S: Identifier, I: Identifier> PartialEq for Snapshot<S, I> {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections && self.reloaded == other.reloaded
    }
}

impl<S: Identifier, I: Identifier> Snapshot<S, I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_sections(&mut self, ids: impl IntoIterator<Item = S>) -> MosaicResult<()> {
        let ids: Vec<S> = ids.into_iter().collect();
        let mut seen = HashSet::with_capacity(ids.len());
        for id in &ids {
            if self.section_position(id).is_some() || !seen.insert(id) {
                return Err(MosaicError::snapshot(format!(
                    "duplicate section identifier {id:?}"
                )));
            }
        }
        self.sections.extend(ids.into_iter().map(|id| SectionEntry {
            id,
            items: Vec::new(),
        }));
        Ok(())
    }

    /// Append items to `section`, or to the last section when `section` is `None`.
    pub fn append_items(
        &mut self,
        items: impl IntoIterator<Item = I>,
        section: Option<&S>,
    ) -> MosaicResult<()> {
        let position = match section {
            Some(id) => self.require_section(id)?,
            None => self.sections.len().checked_sub(1).ok_or_else(|| {
                MosaicError::snapshot("cannot append items to a snapshot without sections")
            })?,
        };
        let items = self.check_new_items(items)?;
        let owner = self.sections[position].id.clone();
        for item in &items {
            self.owners.insert(item.clone(), owner.clone());
        }
        self.sections[position].items.extend(items);
        Ok(())
    }

    pub fn insert_items_before(
        &mut self,
        items: impl IntoIterator<Item = I>,
        before: &I,
    ) -> MosaicResult<()> {
        self.insert_items_at(items, before, 0)
    }

    pub fn insert_items_after(
        &mut self,
        items: impl IntoIterator<Item = I>,
        after: &I,
    ) -> MosaicResult<()> {
        self.insert_items_at(items, after, 1)
    }

    fn insert_items_at(
        &mut self,
        items: impl IntoIterator<Item = I>,
        anchor: &I,
        shift: usize,
    ) -> MosaicResult<()> {
        let path = self.require_item(anchor)?;
        let items = self.check_new_items(items)?;
        let entry = &mut self.sections[path.section];
        for item in &items {
            self.owners.insert(item.clone(), entry.id.clone());
        }
        let at = path.item + shift;
        entry.items.splice(at..at, items);
        Ok(())
    }

    pub fn delete_items(&mut self, items: &[I]) -> MosaicResult<()> {
        for item in items {
            self.require_item(item)?;
        }
        let doomed: HashSet<&I> = items.iter().collect();
        for entry in &mut self.sections {
            entry.items.retain(|i| !doomed.contains(i));
        }
        for item in items {
            self.owners.remove(item);
        }
        self.reloaded.retain(|i| !doomed.contains(i));
        Ok(())
    }

    /// Delete sections together with their items.
    pub fn delete_sections(&mut self, sections: &[S]) -> MosaicResult<()> {
        for id in sections {
            self.require_section(id)?;
        }
        let doomed: HashSet<&S> = sections.iter().collect();
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.sections)
            .into_iter()
            .partition(|entry| doomed.contains(&entry.id));
        self.sections = kept;
        for item in removed.iter().flat_map(|entry| &entry.items) {
            self.owners.remove(item);
        }
        let owners = &self.owners;
        self.reloaded.retain(|i| owners.contains_key(i));
        Ok(())
    }

    pub fn move_item_before(&mut self, item: &I, before: &I) -> MosaicResult<()> {
        self.move_item(item, before, 0)
    }

    pub fn move_item_after(&mut self, item: &I, after: &I) -> MosaicResult<()> {
        self.move_item(item, after, 1)
    }

    fn move_item(&mut self, item: &I, anchor: &I, shift: usize) -> MosaicResult<()> {
        if item == anchor {
            return Err(MosaicError::snapshot(format!(
                "cannot move item {item:?} relative to itself"
            )));
        }
        let from = self.require_item(item)?;
        self.require_item(anchor)?;

        let moved = self.sections[from.section].items.remove(from.item);
        let to = self.require_item(anchor)?;
        let entry = &mut self.sections[to.section];
        entry.items.insert(to.item + shift, moved.clone());
        self.owners.insert(moved, entry.id.clone());
        Ok(())
    }

    /// Mark items whose content changed while their identity did not.
    pub fn reload_items(&mut self, items: &[I]) -> MosaicResult<()> {
        for item in items {
            self.require_item(item)?;
        }
        for item in items {
            if !self.reloaded.contains(item) {
                self.reloaded.push(item.clone());
            }
        }
        Ok(())
    }

    pub fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    /// Total number of items over all sections.
    pub fn number_of_items(&self) -> usize {
        self.owners.len()
    }

    pub fn items_in_section(&self, section: &S) -> Option<&[I]> {
        self.section_position(section)
            .map(|p| self.sections[p].items.as_slice())
    }

    pub fn section_identifiers(&self) -> impl ExactSizeIterator<Item = &S> {
        self.sections.iter().map(|entry| &entry.id)
    }

    /// Every item identifier, section by section.
    pub fn item_identifiers(&self) -> impl Iterator<Item = &I> {
        self.sections.iter().flat_map(|entry| entry.items.iter())
    }

    pub fn section_at(&self, index: usize) -> Option<&S> {
        self.sections.get(index).map(|entry| &entry.id)
    }

    pub fn section_index(&self, section: &S) -> Option<usize> {
        self.section_position(section)
    }

    pub fn index_path_of(&self, item: &I) -> Option<IndexPath> {
        let owner = self.owners.get(item)?;
        let section = self.section_position(owner)?;
        let position = self.sections[section].items.iter().position(|i| i == item)?;
        Some(IndexPath::new(section, position))
    }

    /// Index path of every item, built in one pass.
    pub fn index_paths(&self) -> HashMap<&I, IndexPath> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(section, entry)| {
                entry
                    .items
                    .iter()
                    .enumerate()
                    .map(move |(item, id)| (id, IndexPath::new(section, item)))
            })
            .collect()
    }

    pub fn item_at(&self, index_path: IndexPath) -> Option<&I> {
        self.sections
            .get(index_path.section)?
            .items
            .get(index_path.item)
    }

    pub fn section_of_item(&self, item: &I) -> Option<&S> {
        self.owners.get(item)
    }

    pub fn contains_item(&self, item: &I) -> bool {
        self.owners.contains_key(item)
    }

    /// Items marked with [`Snapshot::reload_items`], in request order.
    pub fn reloaded_items(&self) -> &[I] {
        &self.reloaded
    }

    pub(crate) fn clear_reloads(&mut self) {
        self.reloaded.clear();
    }

    fn section_position(&self, id: &S) -> Option<usize> {
        self.sections.iter().position(|entry| &entry.id == id)
    }

    fn require_section(&self, id: &S) -> MosaicResult<usize> {
        self.section_position(id)
            .ok_or_else(|| MosaicError::snapshot(format!("unknown section identifier {id:?}")))
    }

    fn require_item(&self, id: &I) -> MosaicResult<IndexPath> {
        self.index_path_of(id)
            .ok_or_else(|| MosaicError::snapshot(format!("unknown item identifier {id:?}")))
    }

    fn check_new_items(&self, items: impl IntoIterator<Item = I>) -> MosaicResult<Vec<I>> {
        let items: Vec<I> = items.into_iter().collect();
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if self.owners.contains_key(item) || !seen.insert(item) {
                return Err(MosaicError::snapshot(format!(
                    "duplicate item identifier {item:?}"
                )));
            }
        }
        Ok(items)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/snapshot.rs"]
mod tests;
