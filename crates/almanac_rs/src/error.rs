//! Error types for the almanac service.

use almanac_base::EngineError;
use almanac_config::ConfigError;
use almanac_time::TimeError;
use thiserror::Error;

/// Errors from request-level operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlmanacError {
    /// A date argument is not a real `YYYY-MM-DD` day.
    #[error("invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),
    /// A required request field was not supplied.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    /// Content tables could not be loaded or do not line up.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Engine failure (date overflow, inconsistent tables).
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<TimeError> for AlmanacError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidDateFormat(input) => Self::InvalidDateFormat(input),
            other => Self::Engine(EngineError::Time(other)),
        }
    }
}
