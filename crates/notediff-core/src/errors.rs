use notediff_core_types::RequestId;
use thiserror::Error;

use crate::diff::model::BlockId;

/// Result type alias using NoteDiffError
pub type Result<T> = std::result::Result<T, NoteDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and the CLI) can
/// match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    /// Input exceeds the configured line or LCS-table limits
    InputTooLarge,
    /// A block id that does not occur in the diff
    UnknownBlock,

    // Integrity
    /// Round-trip validation of a diff or merge failed; never persist
    ConsistencyViolation,
    /// A serialized diff no longer matches the texts it was computed from
    StaleDiff,

    // Integration/IO
    Config,
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InputTooLarge => "ERR_INPUT_TOO_LARGE",
            ExErrorKind::UnknownBlock => "ERR_UNKNOWN_BLOCK",
            ExErrorKind::ConsistencyViolation => "ERR_CONSISTENCY_VIOLATION",
            ExErrorKind::StaleDiff => "ERR_STALE_DIFF",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Which reconstruction a consistency check failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconstructionSide {
    /// `Common` + `Deleted` lines did not reproduce the original text
    Original,
    /// `Common` + `Added` lines did not reproduce the new text
    New,
    /// The selection-applied lines did not reproduce the candidate merge
    Merged,
}

impl ReconstructionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconstructionSide::Original => "original",
            ReconstructionSide::New => "new",
            ReconstructionSide::Merged => "merged",
        }
    }
}

impl std::fmt::Display for ReconstructionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus
/// optional context for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    block_id: Option<BlockId>,
    side: Option<ReconstructionSide>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            block_id: None,
            side: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add block context
    pub fn with_block_id(mut self, block_id: BlockId) -> Self {
        self.block_id = Some(block_id);
        self
    }

    /// Add the failing reconstruction side
    pub fn with_side(mut self, side: ReconstructionSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn block_id(&self) -> Option<BlockId> {
        self.block_id
    }

    pub fn side(&self) -> Option<ReconstructionSide> {
        self.side
    }

    pub fn request_id(&self) -> Option<RequestId> {
        self.request_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(block_id) = self.block_id {
            write!(f, " (block: {})", block_id)?;
        }
        if let Some(side) = self.side {
            write!(f, " (side: {})", side)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failure reported by the consistency validator.
///
/// Line counts are carried so the caller can show a useful diagnostic
/// without holding on to both texts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("original reconstruction mismatch: expected {expected_lines} lines, rebuilt {actual_lines}")]
    OriginalMismatch {
        expected_lines: usize,
        actual_lines: usize,
    },

    #[error("new reconstruction mismatch: expected {expected_lines} lines, rebuilt {actual_lines}")]
    NewMismatch {
        expected_lines: usize,
        actual_lines: usize,
    },

    #[error("merged reconstruction mismatch: expected {expected_lines} lines, rebuilt {actual_lines}")]
    MergeMismatch {
        expected_lines: usize,
        actual_lines: usize,
    },
}

impl ConsistencyError {
    /// The reconstruction that failed
    pub fn side(&self) -> ReconstructionSide {
        match self {
            ConsistencyError::OriginalMismatch { .. } => ReconstructionSide::Original,
            ConsistencyError::NewMismatch { .. } => ReconstructionSide::New,
            ConsistencyError::MergeMismatch { .. } => ReconstructionSide::Merged,
        }
    }
}

/// Error taxonomy for notediff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoteDiffError {
    /// One side of the comparison has more lines than allowed
    #[error("{side} text has {lines} lines, limit is {limit}")]
    TooManyLines {
        side: &'static str,
        lines: usize,
        limit: usize,
    },

    /// The LCS table for the pair would exceed the cell budget
    #[error("LCS table would need {cells} cells, limit is {limit}")]
    TableTooLarge { cells: usize, limit: usize },

    /// Block id not present in the diff under review
    #[error("Block {block_id} does not exist in this diff")]
    UnknownBlock { block_id: BlockId },

    /// Diff failed round-trip validation
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    /// Serialized diff digests do not match the supplied texts
    #[error("Diff was computed for different {side} content")]
    StaleDiff { side: &'static str },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Filesystem failure
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from NoteDiffError to ExError
impl From<NoteDiffError> for ExError {
    fn from(err: NoteDiffError) -> Self {
        let message = err.to_string();
        match err {
            NoteDiffError::TooManyLines { .. } | NoteDiffError::TableTooLarge { .. } => {
                ExError::new(ExErrorKind::InputTooLarge).with_message(message)
            }
            NoteDiffError::UnknownBlock { block_id } => ExError::new(ExErrorKind::UnknownBlock)
                .with_block_id(block_id)
                .with_message(message),
            NoteDiffError::Consistency(inner) => inner.into(),
            NoteDiffError::StaleDiff { .. } => {
                ExError::new(ExErrorKind::StaleDiff).with_message(message)
            }
            NoteDiffError::Config { .. } => ExError::new(ExErrorKind::Config).with_message(message),
            NoteDiffError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),
            NoteDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<ConsistencyError> for ExError {
    fn from(err: ConsistencyError) -> Self {
        ExError::new(ExErrorKind::ConsistencyViolation)
            .with_side(err.side())
            .with_message(err.to_string())
    }
}

impl From<serde_json::Error> for NoteDiffError {
    fn from(err: serde_json::Error) -> Self {
        NoteDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NoteDiffError {
    fn from(err: toml::de::Error) -> Self {
        NoteDiffError::Config {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for NoteDiffError {
    fn from(err: std::io::Error) -> Self {
        NoteDiffError::Io {
            message: err.to_string(),
        }
    }
}
