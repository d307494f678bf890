//! Diff computation entry point.
//!
//! [`compute_diff`] runs the normalizer, the LCS computer and the block
//! builder for one `(original, new)` pair.

use crate::diff::builder::build_diff_lines;
use crate::diff::lcs::{backtrack, lcs_table};
use crate::diff::model::Diff;
use crate::diff::normalize::{normalize_line_endings, split_lines};

/// Compute the line diff between two texts.
///
/// Both inputs are line-ending normalized first. If they are then equal
/// the empty diff is returned without building the LCS table, so "no
/// changes" never pays the `O(m·n)` cost.
pub fn compute_diff(original: &str, new: &str) -> Diff {
    let original = normalize_line_endings(original);
    let new = normalize_line_endings(new);

    if original == new {
        tracing::debug!(
            component = module_path!(),
            op = "compute_diff",
            short_circuit = true,
            "inputs identical after normalization"
        );
        return Diff::default();
    }

    let original_lines = split_lines(&original);
    let new_lines = split_lines(&new);

    let table = lcs_table(&original_lines, &new_lines);
    let ops = backtrack(&table, &original_lines, &new_lines);
    let diff = Diff::from_lines(build_diff_lines(&ops, &original_lines, &new_lines));

    tracing::debug!(
        component = module_path!(),
        op = "compute_diff",
        original_lines = original_lines.len(),
        new_lines = new_lines.len(),
        diff_len = diff.len(),
        block_count = diff.block_ids().len(),
    );

    diff
}
