//! Line-level diff engine.
//!
//! Compares two versions of a note and produces an ordered [`Diff`] of
//! common, added and deleted lines, with contiguous changes grouped into
//! change blocks that a caller can accept or reject individually.
//!
//! ## Entry point
//!
//! ```
//! use notediff_core::diff::compute_diff;
//!
//! let diff = compute_diff("a\nb\nc", "a\nx\nc");
//! assert_eq!(diff.block_ids().len(), 1);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce an identical diff, including
//!   the order of deletions and insertions inside a substitution.
//! - **Losslessness**: `Common`+`Deleted` rows rebuild the original and
//!   `Common`+`Added` rows rebuild the new text (after CRLF→LF).
//! - **Identity short-circuit**: equal inputs give the empty diff.

pub mod builder;
pub mod engine;
pub mod lcs;
pub mod model;
pub mod normalize;

pub use engine::compute_diff;
pub use model::{BlockId, ChangeBlock, ChangeBlockKind, Diff, DiffLine, DiffLineKind, DiffStats};
