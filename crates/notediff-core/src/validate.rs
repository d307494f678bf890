//! Round-trip consistency checks.
//!
//! Rebuilds each side of a diff from its own rows and compares against the
//! texts the caller holds. Nothing here depends on [`crate::reconstruct`],
//! so a defect there (or in the block builder) cannot mask itself.

use crate::diff::model::{Diff, DiffLine, DiffLineKind};
use crate::diff::normalize::{line_count, normalize_line_endings};
use crate::errors::ConsistencyError;
use crate::selection::Selection;

fn rebuild<'a>(diff: &'a Diff, keep: impl Fn(&DiffLine) -> bool) -> String {
    diff.iter()
        .filter(|line| line.kind != DiffLineKind::HunkHeader && keep(*line))
        .map(|line| line.content.as_str())
        .collect::<Vec<&'a str>>()
        .join("\n")
}

fn check(
    expected: &str,
    actual: &str,
    err: fn(usize, usize) -> ConsistencyError,
) -> Result<(), ConsistencyError> {
    if expected == actual {
        Ok(())
    } else {
        Err(err(line_count(expected), line_count(actual)))
    }
}

fn original_mismatch(expected_lines: usize, actual_lines: usize) -> ConsistencyError {
    ConsistencyError::OriginalMismatch {
        expected_lines,
        actual_lines,
    }
}

fn new_mismatch(expected_lines: usize, actual_lines: usize) -> ConsistencyError {
    ConsistencyError::NewMismatch {
        expected_lines,
        actual_lines,
    }
}

fn merge_mismatch(expected_lines: usize, actual_lines: usize) -> ConsistencyError {
    ConsistencyError::MergeMismatch {
        expected_lines,
        actual_lines,
    }
}

/// Check that `diff` rebuilds both `original` and `new` exactly.
///
/// Inputs are line-ending normalized the same way the generator does. The
/// original side is checked first. An empty diff is the generator's "no
/// changes" answer and is valid exactly when the two texts are equal.
///
/// # Errors
///
/// - `OriginalMismatch`: `Common`+`Deleted` rows do not rebuild `original`
/// - `NewMismatch`: `Common`+`Added` rows do not rebuild `new`
pub fn validate_diff(original: &str, new: &str, diff: &Diff) -> Result<(), ConsistencyError> {
    let original = normalize_line_endings(original);
    let new = normalize_line_endings(new);

    if diff.is_empty() && original == new {
        return Ok(());
    }

    check(&original, &rebuild(diff, DiffLine::in_original), original_mismatch)?;
    check(&new, &rebuild(diff, DiffLine::in_new), new_mismatch)
}

/// Post-reconstruction check of a candidate `merged` text.
///
/// Verifies the original side as [`validate_diff`] does, then independently
/// applies `selection` to the diff rows and compares with `merged`.
///
/// # Errors
///
/// - `OriginalMismatch`: the diff does not describe `original`
/// - `MergeMismatch`: `merged` is not what `selection` produces
pub fn validate_merge(
    original: &str,
    merged: &str,
    diff: &Diff,
    selection: &Selection,
) -> Result<(), ConsistencyError> {
    let original = normalize_line_endings(original);
    let merged = normalize_line_endings(merged);

    if diff.is_empty() {
        return check(&original, &merged, merge_mismatch);
    }

    check(&original, &rebuild(diff, DiffLine::in_original), original_mismatch)?;

    let expected = rebuild(diff, |line| match line.change_block_id {
        None => line.kind == DiffLineKind::Common,
        Some(id) if selection.contains(id) => line.kind == DiffLineKind::Added,
        Some(_) => line.kind == DiffLineKind::Deleted,
    });
    check(&expected, &merged, merge_mismatch)
}
