//! Accept/reject state for change blocks.
//!
//! A [`Selection`] is plain data owned by the caller. Selecting a block
//! means "apply this block's edit"; the engine only defines what the
//! toggles do, never when they happen.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::diff::model::{BlockId, Diff};

/// Distinct block ids present in `diff`, in first-appearance order.
pub fn all_block_ids(diff: &Diff) -> Vec<BlockId> {
    diff.block_ids()
}

/// How much of a diff a selection covers, for tri-state "select all" UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionCoverage {
    None,
    Partial,
    All,
}

/// Total and selected block counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCounts {
    pub total: usize,
    pub selected: usize,
}

/// Set of accepted change blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: BTreeSet<BlockId>,
}

impl Selection {
    /// Nothing accepted: reconstruction yields the original text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every block of `diff` accepted. This is the conventional default.
    pub fn all(diff: &Diff) -> Self {
        Self::from_ids(all_block_ids(diff))
    }

    pub fn from_ids(ids: impl IntoIterator<Item = BlockId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Symmetric difference with `{id}`: add if absent, remove if present.
    ///
    /// Ids are not checked against any diff.
    pub fn toggle_block(&mut self, id: BlockId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Clear the selection if it is exactly the full block set of `diff`,
    /// otherwise set it to the full block set.
    ///
    /// After any single-block toggle this selects everything rather than
    /// clearing; callers needing tri-state behaviour use [`Self::coverage`].
    pub fn toggle_all(&mut self, diff: &Diff) {
        let full: BTreeSet<BlockId> = all_block_ids(diff).into_iter().collect();
        if self.ids == full {
            self.ids.clear();
        } else {
            self.ids = full;
        }
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.ids.iter().copied()
    }

    /// Counts relative to `diff`. Selected ids that do not occur in the
    /// diff are not counted.
    pub fn counts(&self, diff: &Diff) -> BlockCounts {
        let all = all_block_ids(diff);
        BlockCounts {
            total: all.len(),
            selected: all.iter().filter(|id| self.contains(**id)).count(),
        }
    }

    pub fn coverage(&self, diff: &Diff) -> SelectionCoverage {
        let counts = self.counts(diff);
        if counts.selected == 0 {
            SelectionCoverage::None
        } else if counts.selected == counts.total {
            SelectionCoverage::All
        } else {
            SelectionCoverage::Partial
        }
    }
}

impl FromIterator<BlockId> for Selection {
    fn from_iter<I: IntoIterator<Item = BlockId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}
