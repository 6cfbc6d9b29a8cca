//! Calendar-date handling shared by every almanac engine.
//!
//! This crate provides:
//! - `CalendarDate`, a naive `YYYY-MM-DD` date with strict parsing
//! - Whole-day offsets and weekday labels
//! - `DateRange`, an inclusive day-by-day window around a center date
//!
//! All dates are naive local dates; there is no timezone component.

pub mod date;
pub mod error;
pub mod range;

pub use date::{CalendarDate, WEEKDAY_NAMES, days_between, today, weekday_name};
pub use error::TimeError;
pub use range::DateRange;
