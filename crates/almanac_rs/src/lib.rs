//! Request-level almanac service.
//!
//! `Almanac` owns the immutable content tables (shared through `Arc`) and
//! the two query histories, and exposes one method per request:
//!
//! - Biorhythm: today, a given date, or a window of days. Errors are
//!   returned as `Err(AlmanacError)`.
//! - Maya calendar: a day reading, a window of readings, or a birth
//!   reading. Errors are reported in-band as `MayaOutcome::Error`.
//! - Dress: colour and diet advice for a day or a window, returned as
//!   `Result`.
//!
//! ```rust,ignore
//! use almanac_rs::Almanac;
//!
//! let almanac = Almanac::embedded()?;
//! let day = almanac.biorhythm("1990-01-01", "2025-09-23")?;
//! println!("{}", day.summary.title);
//! ```

pub mod error;
pub mod history;
pub mod outcome;
pub mod service;

pub use error::AlmanacError;
pub use history::History;
pub use outcome::MayaOutcome;
pub use service::{
    Almanac, BIORHYTHM_WINDOW, BiorhythmDay, DRESS_WINDOW, DressRange, MAYA_WINDOW, MayaRange,
};

// Response payload types, so callers need not depend on the engine crate.
pub use almanac_base::{BiorhythmSeries, BirthInfo, DressDayInfo, MayaDayInfo};
pub use almanac_config::GuideConfig;
pub use almanac_time::CalendarDate;
