//! Result type for the Maya operations, which report failures in-band.

use serde::Serialize;

/// Either a payload or an error object.
///
/// Serialises untagged: the payload as-is, or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MayaOutcome<T> {
    Info(T),
    Error { error: String },
}

impl<T> MayaOutcome<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The payload, if any.
    pub fn info(&self) -> Option<&T> {
        match self {
            Self::Info(info) => Some(info),
            Self::Error { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Info(info) => Ok(info),
            Self::Error { error } => Err(error),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for MayaOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(info) => Self::Info(info),
            Err(e) => Self::error(e.to_string()),
        }
    }
}
