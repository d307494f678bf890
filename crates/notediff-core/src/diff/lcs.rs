//! Longest-common-subsequence table and backtrack.
//!
//! Cost is `O(m·n)` in both time and memory. Callers that diff large
//! documents guard with [`crate::review::DiffLimits`] before getting here.

/// One step of the alignment between the original and new line sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// `original[old] == new[new]`
    Equal { old: usize, new: usize },
    /// `original[old]` is absent from the new text
    Delete { old: usize },
    /// `new[new]` is absent from the original text
    Insert { new: usize },
}

/// Build the `(m+1) × (n+1)` LCS length table.
///
/// `table[i][j]` is the LCS length of the first `i` original lines and the
/// first `j` new lines.
pub fn lcs_table(original: &[&str], new: &[&str]) -> Vec<Vec<usize>> {
    let m = original.len();
    let n = new.len();
    let mut table = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if original[i - 1] == new[j - 1] {
                table[i][j] = table[i - 1][j - 1] + 1;
            } else {
                table[i][j] = table[i - 1][j].max(table[i][j - 1]);
            }
        }
    }

    table
}

/// Walk the table from `(m, n)` back to `(0, 0)` and return the edit
/// operations in forward order.
///
/// On a tie (`table[i][j-1] >= table[i-1][j]`) the walk steps over the
/// insertion first, so in forward order the deletion comes out ahead of
/// the insertion that replaces it (`-b +x`, not `+x -b`). The `>=` is part
/// of the output contract: `>` gives a different, equally minimal diff.
pub fn backtrack(table: &[Vec<usize>], original: &[&str], new: &[&str]) -> Vec<EditOp> {
    let mut ops = Vec::with_capacity(original.len() + new.len());
    let mut i = original.len();
    let mut j = new.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1] == new[j - 1] {
            ops.push(EditOp::Equal {
                old: i - 1,
                new: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
            ops.push(EditOp::Insert { new: j - 1 });
            j -= 1;
        } else {
            ops.push(EditOp::Delete { old: i - 1 });
            i -= 1;
        }
    }

    ops.reverse();
    ops
}
