//! Configuration for callers of the engine.
//!
//! Loaded from TOML; every section and key is optional.
//!
//! ```toml
//! [limits]
//! max_lines = 20000
//! max_cells = 25000000
//!
//! [logging]
//! profile = "production"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::logging_facility::Profile;
use crate::review::DiffLimits;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoteDiffConfig {
    pub limits: DiffLimits,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub profile: Profile,
}

impl NoteDiffConfig {
    /// # Errors
    ///
    /// `Config` if the text is not valid TOML for this structure.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `Config` if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
