//! notediff Core - line-level diff and selective patch engine
//!
//! This crate compares two versions of a note and lets a caller accept or
//! reject each change block before producing the merged text:
//! - Line-ending normalization and lossless line splitting
//! - LCS-based line diff with deterministic tie-breaking
//! - Change-block grouping and block selection
//! - Reconstruction of the merged document from a selection
//! - Round-trip consistency validation before anything is persisted
//!
//! Everything here is synchronous and free of I/O except
//! [`config::NoteDiffConfig::load`].

pub mod config;
pub mod diff;
pub mod digest;
pub mod errors;
pub mod logging_facility;
pub mod reconstruct;
pub mod review;
pub mod selection;
pub mod validate;

pub use notediff_core_types as core_types;

// Re-export commonly used types
pub use config::NoteDiffConfig;
pub use diff::{compute_diff, BlockId, Diff, DiffLine, DiffLineKind};
pub use digest::{content_digest, DiffIdentity, DiffReport};
pub use errors::{ConsistencyError, ExError, ExErrorKind, NoteDiffError, ReconstructionSide, Result};
pub use reconstruct::reconstruct;
pub use review::{DiffLimits, EditReview};
pub use selection::{all_block_ids, BlockCounts, Selection, SelectionCoverage};
pub use validate::{validate_diff, validate_merge};
