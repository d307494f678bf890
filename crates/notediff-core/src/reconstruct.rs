//! Builds the merged document for a diff and a selection.

use crate::diff::model::{Diff, DiffLine, DiffLineKind};
use crate::selection::Selection;

/// Whether `line` survives in the merged text under `selection`.
///
/// A selected block applies its edit: its added lines appear and its
/// deleted lines are dropped. An unselected block keeps the original.
fn keeps_line(line: &DiffLine, selection: &Selection) -> bool {
    let selected = line
        .change_block_id
        .is_some_and(|id| selection.contains(id));
    match line.kind {
        DiffLineKind::Common => true,
        DiffLineKind::Added => selected,
        DiffLineKind::Deleted => !selected,
        DiffLineKind::HunkHeader => false,
    }
}

/// Reconstruct a document from `diff` with the blocks in `selection`
/// applied, joining lines with `\n`.
///
/// With every block selected this is the new text; with none selected it
/// is the original. An empty diff reconstructs to the empty string, since
/// it carries no lines; [`crate::review::EditReview`] handles that case.
pub fn reconstruct(diff: &Diff, selection: &Selection) -> String {
    let kept: Vec<&str> = diff
        .iter()
        .filter(|line| keeps_line(line, selection))
        .map(|line| line.content.as_str())
        .collect();
    kept.join("\n")
}
