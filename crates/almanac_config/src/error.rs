//! Error types for loading and validating content tables.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading, parsing, or validating a [`GuideConfig`](crate::GuideConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid TOML for the expected schema.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The document parsed but a table has the wrong shape.
    #[error("invalid config: {0}")]
    Invalid(String),
}
