use notediff_core::{Diff, DiffLineKind};

/// Compact row shape: `" a"` common, `"-b"` deleted, `"+x"` added.
#[allow(dead_code)]
pub fn shape(diff: &Diff) -> Vec<String> {
    diff.iter()
        .map(|line| {
            let marker = match line.kind {
                DiffLineKind::Common => ' ',
                DiffLineKind::Added => '+',
                DiffLineKind::Deleted => '-',
                DiffLineKind::HunkHeader => '@',
            };
            format!("{}{}", marker, line.content)
        })
        .collect()
}

/// Block id of every row, `0` for common rows.
#[allow(dead_code)]
pub fn block_column(diff: &Diff) -> Vec<u32> {
    diff.iter()
        .map(|line| line.change_block_id.map_or(0, |id| id.get()))
        .collect()
}
