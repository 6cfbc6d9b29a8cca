//! Inclusive day-by-day date windows.

use serde::Serialize;

use crate::date::CalendarDate;
use crate::error::TimeError;

/// An inclusive range of consecutive calendar days.
///
/// Serialises as `{"start": "YYYY-MM-DD", "end": "YYYY-MM-DD"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Range from `start` to `end`, both included.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, TimeError> {
        if start > end {
            return Err(TimeError::InvertedRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// `center - days_before ..= center + days_after`.
    pub fn around(
        center: CalendarDate,
        days_before: u32,
        days_after: u32,
    ) -> Result<Self, TimeError> {
        let start = center.add_days(-i64::from(days_before))?;
        let end = center.add_days(i64::from(days_after))?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Number of days in the range (always at least 1).
    pub fn len(&self) -> usize {
        (self.start.days_until(self.end) + 1) as usize
    }

    /// A range always holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Days in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let end = self.end.naive();
        self.start
            .naive()
            .iter_days()
            .take_while(move |d| *d <= end)
            .map(CalendarDate::from)
    }
}

impl IntoIterator for DateRange {
    type Item = CalendarDate;
    type IntoIter = Box<dyn Iterator<Item = CalendarDate>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
