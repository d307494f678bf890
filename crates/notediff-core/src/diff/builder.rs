//! Turns LCS edit operations into numbered, block-grouped diff lines.

use crate::diff::lcs::EditOp;
use crate::diff::model::{BlockId, DiffLine};

/// Build [`DiffLine`]s from an edit script.
///
/// Line numbers are 1-based and only advance on the side(s) a line belongs
/// to. Every run of `Delete`/`Insert` ops not interrupted by an `Equal`
/// shares one block id; ids are allocated from 1 in order of appearance.
pub fn build_diff_lines(ops: &[EditOp], original: &[&str], new: &[&str]) -> Vec<DiffLine> {
    let mut lines = Vec::with_capacity(ops.len());
    let mut original_line = 0usize;
    let mut new_line = 0usize;
    let mut next_block = BlockId::new(1);
    let mut current_block: Option<BlockId> = None;

    for op in ops {
        match *op {
            EditOp::Equal { old, .. } => {
                original_line += 1;
                new_line += 1;
                current_block = None;
                lines.push(DiffLine::common(original[old], original_line, new_line));
            }
            EditOp::Delete { old } => {
                let block = open_block(&mut current_block, &mut next_block);
                original_line += 1;
                lines.push(DiffLine::deleted(original[old], original_line, block));
            }
            EditOp::Insert { new: index } => {
                let block = open_block(&mut current_block, &mut next_block);
                new_line += 1;
                lines.push(DiffLine::added(new[index], new_line, block));
            }
        }
    }

    lines
}

/// Return the block the current run belongs to, allocating one if the
/// previous op was `Equal` (or there was none).
fn open_block(current: &mut Option<BlockId>, next: &mut BlockId) -> BlockId {
    *current.get_or_insert_with(|| {
        let id = *next;
        *next = id.next();
        id
    })
}
