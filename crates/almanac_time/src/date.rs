//! Naive calendar date with a strict `YYYY-MM-DD` canonical form.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeError;

/// Weekday labels, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日",
];

/// A normalized (year, month, day) calendar date.
///
/// Every engine input goes through this type; its `Display` form is the
/// canonical `YYYY-MM-DD` string used in all responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    inner: NaiveDate,
}

impl CalendarDate {
    /// Build a date from components, rejecting days that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or_else(|| TimeError::InvalidDateFormat(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parse exactly `YYYY-MM-DD`.
    ///
    /// No whitespace, no single-digit fields, no alternative separators.
    pub fn parse(input: &str) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidDateFormat(input.to_string());
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self::from)
            .map_err(|_| invalid())
    }

    pub fn year(self) -> i32 {
        self.inner.year()
    }

    pub fn month(self) -> u32 {
        self.inner.month()
    }

    pub fn day(self) -> u32 {
        self.inner.day()
    }

    /// Day of the year, 1-based.
    pub fn ordinal(self) -> u32 {
        self.inner.ordinal()
    }

    /// Weekday index with Monday = 0 .. Sunday = 6.
    pub fn weekday_index(self) -> usize {
        self.inner.weekday().num_days_from_monday() as usize
    }

    /// Days elapsed since 0001-01-01, which is day 1.
    pub fn proleptic_ordinal(self) -> i64 {
        i64::from(self.inner.num_days_from_ce())
    }

    /// Whole days from `self` to `other` (negative when `other` is earlier).
    pub fn days_until(self, other: CalendarDate) -> i64 {
        other.inner.signed_duration_since(self.inner).num_days()
    }

    /// Shift by a signed number of days.
    pub fn add_days(self, days: i64) -> Result<Self, TimeError> {
        let step = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.inner.checked_add_days(step)
        } else {
            self.inner.checked_sub_days(step)
        };
        shifted
            .map(Self::from)
            .ok_or_else(|| TimeError::OutOfRange(format!("{self} {days:+} days")))
    }

    pub(crate) fn naive(self) -> NaiveDate {
        self.inner
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(inner: NaiveDate) -> Self {
        Self { inner }
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.inner.year(),
            self.inner.month(),
            self.inner.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// `b - a` in whole days.
pub fn days_between(a: CalendarDate, b: CalendarDate) -> i64 {
    a.days_until(b)
}

/// Weekday label for a date.
pub fn weekday_name(date: CalendarDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday_index()]
}

/// Today's local date from the system clock.
pub fn today() -> CalendarDate {
    CalendarDate::from(Local::now().date_naive())
}
