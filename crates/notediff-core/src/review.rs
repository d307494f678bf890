//! Caller-side review of one proposed edit.
//!
//! [`EditReview`] ties the pure pieces together for the usual lifecycle:
//! diff the saved note against a proposed version, let the user toggle
//! blocks, then produce validated text for persistence.

use std::time::Instant;

use notediff_core_types::RequestId;
use serde::{Deserialize, Serialize};

use crate::diff::compute_diff;
use crate::diff::model::{BlockId, ChangeBlock, Diff};
use crate::diff::normalize::{line_count, normalize_line_endings};
use crate::errors::{ExError, NoteDiffError};
use crate::reconstruct::reconstruct;
use crate::selection::{BlockCounts, Selection, SelectionCoverage};
use crate::validate::{validate_diff, validate_merge};
use crate::{log_op_end, log_op_error, log_op_start};

/// Size guard for the `O(m·n)` LCS table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffLimits {
    /// Maximum lines on either side
    pub max_lines: usize,
    /// Maximum `(m+1)·(n+1)` table cells
    pub max_cells: usize,
}

impl Default for DiffLimits {
    fn default() -> Self {
        Self {
            max_lines: 20_000,
            max_cells: 25_000_000,
        }
    }
}

impl DiffLimits {
    /// Check whether diffing `original` against `new` fits the limits.
    ///
    /// Texts that are equal after normalization always pass, since they
    /// never reach the LCS computer.
    ///
    /// # Errors
    ///
    /// `TooManyLines` or `TableTooLarge`.
    pub fn check(&self, original: &str, new: &str) -> Result<(), NoteDiffError> {
        let original = normalize_line_endings(original);
        let new = normalize_line_endings(new);
        if original == new {
            return Ok(());
        }

        let m = line_count(&original);
        let n = line_count(&new);
        for (side, lines) in [("original", m), ("new", n)] {
            if lines > self.max_lines {
                return Err(NoteDiffError::TooManyLines {
                    side,
                    lines,
                    limit: self.max_lines,
                });
            }
        }

        let cells = (m + 1).saturating_mul(n + 1);
        if cells > self.max_cells {
            return Err(NoteDiffError::TableTooLarge {
                cells,
                limit: self.max_cells,
            });
        }
        Ok(())
    }
}

/// One pending edit under review: both texts, their diff and the current
/// selection (all blocks accepted initially).
#[derive(Debug, Clone)]
pub struct EditReview {
    request_id: RequestId,
    original: String,
    proposed: String,
    diff: Diff,
    selection: Selection,
}

impl EditReview {
    /// Start a review without any size guard.
    pub fn new(original: &str, proposed: &str) -> Self {
        let original = normalize_line_endings(original).into_owned();
        let proposed = normalize_line_endings(proposed).into_owned();
        let diff = compute_diff(&original, &proposed);
        let selection = Selection::all(&diff);
        Self {
            request_id: RequestId::new(),
            original,
            proposed,
            diff,
            selection,
        }
    }

    /// Start a review, refusing inputs that exceed `limits` before any
    /// diff work is done.
    ///
    /// # Errors
    ///
    /// `InputTooLarge` when the pair does not fit `limits`.
    pub fn with_limits(
        original: &str,
        proposed: &str,
        limits: &DiffLimits,
    ) -> Result<Self, ExError> {
        limits
            .check(original, proposed)
            .map_err(|e| ExError::from(e).with_op("review"))?;
        Ok(Self::new(original, proposed))
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Normalized original text
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Normalized proposed text
    pub fn proposed(&self) -> &str {
        &self.proposed
    }

    pub fn diff(&self) -> &Diff {
        &self.diff
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn blocks(&self) -> Vec<ChangeBlock> {
        self.diff.blocks()
    }

    pub fn has_changes(&self) -> bool {
        !self.diff.is_empty()
    }

    pub fn counts(&self) -> BlockCounts {
        self.selection.counts(&self.diff)
    }

    pub fn coverage(&self) -> SelectionCoverage {
        self.selection.coverage(&self.diff)
    }

    fn ensure_block(&self, id: BlockId, op: &str) -> Result<(), ExError> {
        if self.diff.block_ids().contains(&id) {
            Ok(())
        } else {
            Err(ExError::from(NoteDiffError::UnknownBlock { block_id: id })
                .with_op(op)
                .with_request_id(self.request_id))
        }
    }

    /// Flip one block.
    ///
    /// # Errors
    ///
    /// `UnknownBlock` if `id` is not a block of this diff.
    pub fn toggle_block(&mut self, id: BlockId) -> Result<(), ExError> {
        self.ensure_block(id, "toggle_block")?;
        self.selection.toggle_block(id);
        Ok(())
    }

    pub fn toggle_all(&mut self) {
        self.selection.toggle_all(&self.diff);
    }

    /// Replace the selection with exactly `ids`.
    ///
    /// # Errors
    ///
    /// `UnknownBlock` for the first id that is not a block of this diff;
    /// the selection is left unchanged.
    pub fn select(&mut self, ids: impl IntoIterator<Item = BlockId>) -> Result<(), ExError> {
        let selection = Selection::from_ids(ids);
        for id in selection.iter() {
            self.ensure_block(id, "select")?;
        }
        self.selection = selection;
        Ok(())
    }

    /// Merged text for the current selection, unvalidated.
    pub fn preview(&self) -> String {
        if self.diff.is_empty() {
            self.original.clone()
        } else {
            reconstruct(&self.diff, &self.selection)
        }
    }

    /// Merged text for the current selection, checked for losslessness.
    ///
    /// The diff is validated against both texts and the merged result is
    /// checked against an independent application of the selection. Only
    /// an `Ok` result may be persisted.
    ///
    /// # Errors
    ///
    /// `ConsistencyViolation` naming the side that failed.
    pub fn apply(&self) -> Result<String, ExError> {
        let start = Instant::now();
        let counts = self.counts();
        log_op_start!(
            "apply",
            request_id = %self.request_id,
            block_count = counts.total,
            selected_count = counts.selected,
        );

        let merged = self.preview();
        let checked = validate_diff(&self.original, &self.proposed, &self.diff)
            .and_then(|()| validate_merge(&self.original, &merged, &self.diff, &self.selection));

        let duration_ms = start.elapsed().as_millis() as u64;
        match checked {
            Ok(()) => {
                log_op_end!(
                    "apply",
                    duration_ms = duration_ms,
                    request_id = %self.request_id,
                );
                Ok(merged)
            }
            Err(e) => {
                let err = ExError::from(e)
                    .with_op("apply")
                    .with_request_id(self.request_id);
                log_op_error!(
                    "apply",
                    err.clone(),
                    duration_ms = duration_ms,
                    request_id = %self.request_id,
                );
                Err(err)
            }
        }
    }

    /// Review over an externally supplied diff, e.g. one read back from a
    /// report. The diff is trusted only as far as [`Self::apply`] checks it.
    pub fn from_parts(original: &str, proposed: &str, diff: Diff) -> Self {
        let selection = Selection::all(&diff);
        Self {
            request_id: RequestId::new(),
            original: normalize_line_endings(original).into_owned(),
            proposed: normalize_line_endings(proposed).into_owned(),
            diff,
            selection,
        }
    }
}
