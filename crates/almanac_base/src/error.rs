//! Error types for the guidance engines.

use almanac_time::TimeError;
use thiserror::Error;

/// Errors from engine computations.
///
/// Engines are total over valid dates and validated tables; these errors
/// surface only for date arithmetic overflow or tables that do not line up
/// with the fixed seal/tone/element enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Error from date arithmetic.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// A table the computation draws from is empty or too short.
    #[error("table {0} has too few entries")]
    EmptyTable(&'static str),
    /// A table entry names an element outside the five elements.
    #[error("unknown element label {0:?}")]
    UnknownElement(String),
    /// A positional table does not match its enumeration.
    #[error("table {table} entry {index}: expected {expected:?}, found {found:?}")]
    TableMismatch {
        table: &'static str,
        index: usize,
        expected: &'static str,
        found: String,
    },
}
