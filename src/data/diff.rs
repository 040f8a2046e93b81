use std::collections::{HashMap, HashSet};

use crate::data::snapshot::{Identifier, Snapshot};
use crate::foundation::core::IndexPath;

/// One step of an edit script between two snapshots.
///
/// Deletes, reloads and move sources address the old snapshot; inserts and move destinations
/// address the new one, the way a batched update is applied.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum UpdateOp {
    DeleteSection { index: usize },
    InsertSection { index: usize },
    MoveSection { from: usize, to: usize },
    DeleteItem { at: IndexPath },
    InsertItem { at: IndexPath },
    MoveItem { from: IndexPath, to: IndexPath },
    ReloadItem { at: IndexPath },
}

/// Result of applying a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Changeset {
    pub operations: Vec<UpdateOp>,
    pub animated: bool,
}

/// Per-category operation counts of a [`Changeset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ChangeSummary {
    pub deletes: usize,
    pub inserts: usize,
    pub moves: usize,
    pub reloads: usize,
}

impl Changeset {
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn summary(&self) -> ChangeSummary {
        let mut out = ChangeSummary::default();
        for op in &self.operations {
            match op {
                UpdateOp::DeleteSection { .. } | UpdateOp::DeleteItem { .. } => out.deletes += 1,
                UpdateOp::InsertSection { .. } | UpdateOp::InsertItem { .. } => out.inserts += 1,
                UpdateOp::MoveSection { .. } | UpdateOp::MoveItem { .. } => out.moves += 1,
                UpdateOp::ReloadItem { .. } => out.reloads += 1,
            }
        }
        out
    }
}

/// Minimum edit script turning `old` into `new`.
///
/// Identifiers found in only one snapshot become deletes or inserts. Items of an inserted or
/// deleted section are covered by the section operation. Common identifiers stay in place along
/// the longest run that keeps their relative order (items only when their section is unchanged);
/// every other common identifier becomes one move. Reload requests on `new` for items that
/// persist become reloads.
#[tracing::instrument(
    skip_all,
    fields(old_items = old.number_of_items(), new_items = new.number_of_items())
)]
pub fn diff<S: Identifier, I: Identifier>(
    old: &Snapshot<S, I>,
    new: &Snapshot<S, I>,
) -> Vec<UpdateOp> {
    let mut ops = Vec::new();

    let old_sections: Vec<&S> = old.section_identifiers().collect();
    let new_sections: Vec<&S> = new.section_identifiers().collect();
    let old_section_pos = positions(&old_sections);
    let new_section_pos = positions(&new_sections);

    for (idx, id) in old_sections.iter().enumerate() {
        if !new_section_pos.contains_key(id) {
            ops.push(UpdateOp::DeleteSection { index: idx });
        }
    }
    for (idx, id) in new_sections.iter().enumerate() {
        if !old_section_pos.contains_key(id) {
            ops.push(UpdateOp::InsertSection { index: idx });
        }
    }
    let common_old: Vec<&S> = old_sections
        .iter()
        .copied()
        .filter(|id| new_section_pos.contains_key(id))
        .collect();
    let common_new: Vec<&S> = new_sections
        .iter()
        .copied()
        .filter(|id| old_section_pos.contains_key(id))
        .collect();
    let stable_sections = stable_subset(&common_old, &common_new);
    for id in &common_new {
        if !stable_sections.contains(id) {
            ops.push(UpdateOp::MoveSection {
                from: old_section_pos[id],
                to: new_section_pos[id],
            });
        }
    }

    let old_paths = old.index_paths();
    let new_paths = new.index_paths();
    let paths = (&old_paths, &new_paths);

    let mut item_deletes = Vec::new();
    let mut item_inserts = Vec::new();
    let mut item_moves = Vec::new();

    for old_item in old.item_identifiers() {
        if new.contains_item(old_item) {
            continue;
        }
        let section_survives = old
            .section_of_item(old_item)
            .is_some_and(|s| new_section_pos.contains_key(s));
        if section_survives && let Some(&at) = old_paths.get(old_item) {
            item_deletes.push(UpdateOp::DeleteItem { at });
        }
    }

    for section in &new_sections {
        let Some(new_items) = new.items_in_section(section) else {
            continue;
        };
        let section_is_new = !old_section_pos.contains_key(section);

        let mut carried_new = Vec::new();
        for item in new_items {
            match old.section_of_item(item) {
                None if !section_is_new => {
                    if let Some(&at) = new_paths.get(item) {
                        item_inserts.push(UpdateOp::InsertItem { at });
                    }
                }
                None => {}
                Some(old_owner) if old_owner == *section => carried_new.push(item),
                Some(_) => push_move(&mut item_moves, paths, item),
            }
        }

        let carried_old: Vec<&I> = old
            .items_in_section(section)
            .unwrap_or_default()
            .iter()
            .filter(|item| new.section_of_item(item) == Some(*section))
            .collect();
        let stable_items = stable_subset(&carried_old, &carried_new);
        for item in carried_new {
            if !stable_items.contains(item) {
                push_move(&mut item_moves, paths, item);
            }
        }
    }

    ops.extend(item_deletes);
    ops.extend(item_inserts);
    ops.extend(item_moves);

    for item in new.reloaded_items() {
        if let Some(&at) = old_paths.get(item) {
            ops.push(UpdateOp::ReloadItem { at });
        }
    }

    tracing::debug!(operations = ops.len(), "snapshot diff computed");
    ops
}

/// Old and new index path of every item.
type PathMaps<'a, 'b, I> = (&'b HashMap<&'a I, IndexPath>, &'b HashMap<&'a I, IndexPath>);

fn push_move<I: Identifier>(out: &mut Vec<UpdateOp>, (old, new): PathMaps<'_, '_, I>, item: &I) {
    if let (Some(&from), Some(&to)) = (old.get(item), new.get(item)) {
        out.push(UpdateOp::MoveItem { from, to });
    }
}

fn positions<'a, T: Identifier>(ids: &[&'a T]) -> HashMap<&'a T, usize> {
    ids.iter().enumerate().map(|(idx, id)| (*id, idx)).collect()
}

/// Members of the longest common subsequence of two orderings of the same identifiers.
fn stable_subset<'a, T: Identifier>(old: &[&'a T], new: &[&'a T]) -> HashSet<&'a T> {
    let old_pos = positions(old);
    let ranks: Vec<usize> = new.iter().filter_map(|id| old_pos.get(id).copied()).collect();
    longest_increasing(&ranks)
        .into_iter()
        .map(|rank| old[rank])
        .collect()
}

/// Values of one longest strictly increasing subsequence of `seq` (patience sorting).
fn longest_increasing(seq: &[usize]) -> Vec<usize> {
    // tails[k]: index into seq of the smallest tail of an increasing run of length k + 1.
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; seq.len()];
    for (i, &value) in seq.iter().enumerate() {
        let k = tails.partition_point(|&t| seq[t] < value);
        if k > 0 {
            prev[i] = Some(tails[k - 1]);
        }
        if k == tails.len() {
            tails.push(i);
        } else {
            tails[k] = i;
        }
    }

    let mut out = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        out.push(seq[i]);
        cursor = prev[i];
    }
    out.reverse();
    out
}

#[cfg(test)]
#[path = "../../tests/unit/data/diff.rs"]
mod tests;
