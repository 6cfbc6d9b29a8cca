//! Thirteen-moon year: 13 blocks of 28 days starting each July 26.
//!
//! 13 × 28 = 364, so the last day or two of a year do not fit. They are
//! folded into the 13th moon by adding the overflow to the wrapped day
//! count: day 364 reads as day 29 and day 365 (leap years) as day 31.

use almanac_time::CalendarDate;
use serde::Serialize;

/// Days per moon.
pub const MOON_LENGTH: i64 = 28;

/// Moons per year.
pub const MOONS_PER_YEAR: usize = 13;

/// Month and day of the new-year day.
pub const YEAR_START: (u32, u32) = (7, 26);

/// Position of a day within the thirteen-moon year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MayaMonth {
    /// 0-based moon index in [0, 12].
    #[serde(skip)]
    pub index: usize,
    #[serde(rename = "month")]
    pub name: String,
    /// 1-based day of the moon.
    pub day: u32,
    /// "{name} | 第{day}天".
    pub display: String,
}

/// Most recent July 26 on or before `date`.
pub fn year_start(date: CalendarDate) -> CalendarDate {
    let (m, d) = YEAR_START;
    let year = if (date.month(), date.day()) >= (m, d) {
        date.year()
    } else {
        date.year() - 1
    };
    // July 26 exists in every year
    CalendarDate::new(year, m, d).unwrap_or(date)
}

/// (moon index, 1-based day) for a day offset from the new year.
pub fn moon_position(elapsed: i64) -> (usize, u32) {
    let index = elapsed / MOON_LENGTH;
    let day = elapsed % MOON_LENGTH + 1;
    let last = MOONS_PER_YEAR as i64 - 1;
    if index > last {
        (last as usize, (day + elapsed - last * MOON_LENGTH) as u32)
    } else {
        (index as usize, day as u32)
    }
}

/// Moon and day of `date`. `months` holds the 13 moon names in order.
pub fn maya_month(date: CalendarDate, months: &[String]) -> MayaMonth {
    let elapsed = year_start(date).days_until(date);
    let (index, day) = moon_position(elapsed);
    let name = months.get(index).cloned().unwrap_or_default();
    MayaMonth {
        index,
        display: format!("{name} | 第{day}天"),
        name,
        day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn names() -> Vec<String> {
        (1..=13).map(|i| format!("M{i}")).collect()
    }

    #[test]
    fn new_year_day() {
        let m = maya_month(d("2025-07-26"), &names());
        assert_eq!((m.index, m.day), (0, 1));
        assert_eq!(m.display, "M1 | 第1天");
    }

    #[test]
    fn day_before_new_year_belongs_to_previous_year() {
        assert_eq!(year_start(d("2025-07-25")), d("2024-07-26"));
        assert_eq!(year_start(d("2025-01-01")), d("2024-07-26"));
        assert_eq!(year_start(d("2025-12-31")), d("2025-07-26"));
    }

    #[test]
    fn reference_day() {
        // 59 days after 2025-07-26
        let m = maya_month(d("2025-09-23"), &names());
        assert_eq!((m.index, m.day), (2, 4));
        assert_eq!(m.name, "M3");
    }

    #[test]
    fn moon_boundaries() {
        assert_eq!(moon_position(27), (0, 28));
        assert_eq!(moon_position(28), (1, 1));
        assert_eq!(moon_position(335), (11, 28));
        assert_eq!(moon_position(336), (12, 1));
        assert_eq!(moon_position(363), (12, 28));
    }

    #[test]
    fn overflow_folds_into_last_moon() {
        assert_eq!(moon_position(364), (12, 29));
        assert_eq!(moon_position(365), (12, 31));
        let m = maya_month(d("2026-07-25"), &names());
        assert_eq!((m.index, m.day), (12, 29));
        // the 2023-24 year spans Feb 29
        let m = maya_month(d("2024-07-25"), &names());
        assert_eq!((m.index, m.day), (12, 31));
    }

    #[test]
    fn whole_year_invariants() {
        let start = d("2023-07-26");
        for offset in 0..366 {
            let m = maya_month(start.add_days(offset).unwrap(), &names());
            assert!(m.day >= 1);
            assert!(m.index < MOONS_PER_YEAR);
        }
    }
}
