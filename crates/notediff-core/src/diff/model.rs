//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq` so a
//! diff can be handed to a rendering collaborator as JSON and compared
//! structurally in tests.

use serde::{Deserialize, Serialize};

/// Identifier of a change block. Ids start at 1 and ascend in order of
/// first appearance in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(u32);

impl BlockId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BlockId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(BlockId)
    }
}

/// Kind of a single diff row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiffLineKind {
    /// Present in both texts
    Common,
    /// Present only in the new text
    Added,
    /// Present only in the original text
    Deleted,
    /// Reserved for collapsed-context headers. The generator never emits
    /// this kind; reconstruction and validation skip it.
    HunkHeader,
}

/// One row of the aligned diff output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    /// Line text without its terminator
    pub content: String,
    /// 1-based line number in the original text (`Common` and `Deleted`)
    pub original_line_number: Option<usize>,
    /// 1-based line number in the new text (`Common` and `Added`)
    pub new_line_number: Option<usize>,
    /// `None` for `Common`, the owning block for `Added`/`Deleted`
    pub change_block_id: Option<BlockId>,
}

impl DiffLine {
    pub fn common(content: impl Into<String>, original: usize, new: usize) -> Self {
        Self {
            kind: DiffLineKind::Common,
            content: content.into(),
            original_line_number: Some(original),
            new_line_number: Some(new),
            change_block_id: None,
        }
    }

    pub fn deleted(content: impl Into<String>, original: usize, block: BlockId) -> Self {
        Self {
            kind: DiffLineKind::Deleted,
            content: content.into(),
            original_line_number: Some(original),
            new_line_number: None,
            change_block_id: Some(block),
        }
    }

    pub fn added(content: impl Into<String>, new: usize, block: BlockId) -> Self {
        Self {
            kind: DiffLineKind::Added,
            content: content.into(),
            original_line_number: None,
            new_line_number: Some(new),
            change_block_id: Some(block),
        }
    }

    /// True for lines that belong to the original text
    pub fn in_original(&self) -> bool {
        matches!(self.kind, DiffLineKind::Common | DiffLineKind::Deleted)
    }

    /// True for lines that belong to the new text
    pub fn in_new(&self) -> bool {
        matches!(self.kind, DiffLineKind::Common | DiffLineKind::Added)
    }
}

/// Shape of a change block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChangeBlockKind {
    /// Only `Added` lines
    Insertion,
    /// Only `Deleted` lines
    Deletion,
    /// Both `Deleted` and `Added` lines
    Substitution,
}

/// Summary of one change block, derived from the diff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeBlock {
    pub id: BlockId,
    pub kind: ChangeBlockKind,
    /// Index of the block's first row in the diff
    pub start: usize,
    pub added: usize,
    pub deleted: usize,
}

impl ChangeBlock {
    /// Number of diff rows the block spans
    pub fn len(&self) -> usize {
        self.added + self.deleted
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Line and block totals for a diff.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffStats {
    pub common: usize,
    pub added: usize,
    pub deleted: usize,
    pub blocks: usize,
}

/// Ordered sequence of [`DiffLine`]s for one `(original, new)` pair.
///
/// Immutable once built: accessors only. An empty diff means the two
/// texts were identical after line-ending normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Diff {
    lines: Vec<DiffLine>,
}

impl Diff {
    /// Wrap an existing line sequence (e.g. one read back from JSON).
    pub fn from_lines(lines: Vec<DiffLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<DiffLine> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffLine> {
        self.lines.iter()
    }

    /// Distinct block ids in first-appearance order.
    pub fn block_ids(&self) -> Vec<BlockId> {
        let mut ids: Vec<BlockId> = Vec::new();
        for id in self.lines.iter().filter_map(|l| l.change_block_id) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Summaries of every change block, in diff order.
    pub fn blocks(&self) -> Vec<ChangeBlock> {
        let mut blocks: Vec<ChangeBlock> = Vec::new();
        for (index, line) in self.lines.iter().enumerate() {
            let Some(id) = line.change_block_id else {
                continue;
            };
            let position = match blocks.iter().position(|b| b.id == id) {
                Some(position) => position,
                None => {
                    blocks.push(ChangeBlock {
                        id,
                        kind: ChangeBlockKind::Insertion,
                        start: index,
                        added: 0,
                        deleted: 0,
                    });
                    blocks.len() - 1
                }
            };
            let block = &mut blocks[position];
            match line.kind {
                DiffLineKind::Added => block.added += 1,
                DiffLineKind::Deleted => block.deleted += 1,
                DiffLineKind::Common | DiffLineKind::HunkHeader => {}
            }
            block.kind = match (block.deleted, block.added) {
                (0, _) => ChangeBlockKind::Insertion,
                (_, 0) => ChangeBlockKind::Deletion,
                _ => ChangeBlockKind::Substitution,
            };
        }
        blocks
    }

    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats {
            blocks: self.block_ids().len(),
            ..DiffStats::default()
        };
        for line in &self.lines {
            match line.kind {
                DiffLineKind::Common => stats.common += 1,
                DiffLineKind::Added => stats.added += 1,
                DiffLineKind::Deleted => stats.deleted += 1,
                DiffLineKind::HunkHeader => {}
            }
        }
        stats
    }
}

impl<'a> IntoIterator for &'a Diff {
    type Item = &'a DiffLine;
    type IntoIter = std::slice::Iter<'a, DiffLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
