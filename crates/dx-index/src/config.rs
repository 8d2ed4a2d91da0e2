//! Index configuration.
//!
//! Parses the small settings surface the index needs from TOML:
//!
//! ```toml
//! source_dir = "content"
//! base_path = "/docs"
//! search_limit = 20
//! ```
//!
//! Every field has a default, so an empty document is a valid config.

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration for [`ContentIndex::build`](crate::ContentIndex::build).
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Content source directory.
    pub source_dir: PathBuf,
    /// Base URL path prepended to every href.
    pub base_path: String,
    /// Default result cap for searches without an explicit limit.
    pub search_limit: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("content"),
            base_path: "/docs".to_owned(),
            search_limit: 20,
        }
    }
}

/// Error returned when configuration parsing fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML syntax or type error.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl IndexConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed or a
    /// field has the wrong type.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
