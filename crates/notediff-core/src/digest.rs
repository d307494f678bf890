//! Content identity for serialized diffs.
//!
//! A diff written to disk or handed across a process boundary carries the
//! digests of the texts it was computed from, so a consumer can refuse to
//! apply it to anything else.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::diff::model::{Diff, DiffStats};
use crate::diff::normalize::normalize_line_endings;
use crate::errors::{NoteDiffError, Result};

/// Lowercase hex SHA-256 of the line-ending normalized text.
pub fn content_digest(text: &str) -> String {
    let normalized = normalize_line_endings(text);
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

/// Digests of both sides of a diff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffIdentity {
    pub original_digest: String,
    pub new_digest: String,
}

impl DiffIdentity {
    pub fn of(original: &str, new: &str) -> Self {
        Self {
            original_digest: content_digest(original),
            new_digest: content_digest(new),
        }
    }

    /// Check that `original` and `new` are the texts this identity names.
    ///
    /// # Errors
    ///
    /// `StaleDiff` naming the first side whose digest differs.
    pub fn verify(&self, original: &str, new: &str) -> Result<()> {
        if content_digest(original) != self.original_digest {
            return Err(NoteDiffError::StaleDiff { side: "original" });
        }
        if content_digest(new) != self.new_digest {
            return Err(NoteDiffError::StaleDiff { side: "new" });
        }
        Ok(())
    }
}

/// Self-describing serialized diff: identity, totals and rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffReport {
    /// Schema version of this report structure (always 1)
    pub report_schema_version: u32,
    pub identity: DiffIdentity,
    pub stats: DiffStats,
    pub lines: Diff,
}

impl DiffReport {
    pub fn new(original: &str, new: &str, diff: Diff) -> Self {
        Self {
            report_schema_version: 1,
            identity: DiffIdentity::of(original, new),
            stats: diff.stats(),
            lines: diff,
        }
    }

    /// # Errors
    ///
    /// `Serialization` if the JSON does not describe a report.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// `Serialization` if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
