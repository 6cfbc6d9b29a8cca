//! Error types for date parsing and day arithmetic.

use thiserror::Error;

/// Errors from date parsing or date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input is not `YYYY-MM-DD`, or does not name a real calendar day.
    #[error("invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),
    /// Day arithmetic left the representable calendar.
    #[error("date out of range: {0}")]
    OutOfRange(String),
    /// Range start falls after its end.
    #[error("inverted date range: {start} is after {end}")]
    InvertedRange { start: String, end: String },
}
