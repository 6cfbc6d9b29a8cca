//! Biorhythm cycles: three sine waves indexed by days since birth.
//!
//! Each value is `trunc(100 * sin(2π * days / cycle))`, so it always lies in
//! [-100, 100]. Days before birth give negative offsets, which the sine
//! handles without special cases.

use std::f64::consts::PI;

use almanac_config::CycleLengths;
use almanac_time::{CalendarDate, DateRange};
use serde::Serialize;

/// One cycle value for a day offset.
pub fn rhythm_value(cycle_days: u32, days_since_birth: i64) -> i32 {
    // `as` truncates toward zero
    (100.0 * (2.0 * PI * days_since_birth as f64 / f64::from(cycle_days)).sin()) as i32
}

/// The three cycle values for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BiorhythmReading {
    pub physical: i32,
    pub emotional: i32,
    pub intellectual: i32,
}

impl BiorhythmReading {
    /// Sum of the three values, in [-300, 300].
    pub fn total(&self) -> i32 {
        self.physical + self.emotional + self.intellectual
    }
}

/// Biorhythm of `target` for someone born on `birth`.
pub fn biorhythm(
    cycles: &CycleLengths,
    birth: CalendarDate,
    target: CalendarDate,
) -> BiorhythmReading {
    let days = birth.days_until(target);
    BiorhythmReading {
        physical: rhythm_value(cycles.physical, days),
        emotional: rhythm_value(cycles.emotional, days),
        intellectual: rhythm_value(cycles.intellectual, days),
    }
}

/// Parallel per-day series over a date range; index `i` of every vector
/// refers to the same day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BiorhythmSeries {
    pub dates: Vec<CalendarDate>,
    pub physical: Vec<i32>,
    pub emotional: Vec<i32>,
    pub intellectual: Vec<i32>,
}

/// Evaluate every day of `range`, in calendar order.
pub fn biorhythm_range(
    cycles: &CycleLengths,
    birth: CalendarDate,
    range: &DateRange,
) -> BiorhythmSeries {
    let mut series = BiorhythmSeries {
        dates: Vec::with_capacity(range.len()),
        physical: Vec::with_capacity(range.len()),
        emotional: Vec::with_capacity(range.len()),
        intellectual: Vec::with_capacity(range.len()),
    };
    for day in range.iter() {
        let reading = biorhythm(cycles, birth, day);
        series.dates.push(day);
        series.physical.push(reading.physical);
        series.emotional.push(reading.emotional);
        series.intellectual.push(reading.intellectual);
    }
    series
}

/// Overall band of a day, from the sum of the three cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayLevel {
    Excellent,
    Good,
    Average,
    Poor,
    Critical,
}

impl DayLevel {
    pub fn from_total(total: i32) -> Self {
        match total {
            t if t >= 200 => Self::Excellent,
            t if t >= 100 => Self::Good,
            t if t >= 0 => Self::Average,
            t if t >= -100 => Self::Poor,
            _ => Self::Critical,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Excellent => "卓越表现日",
            Self::Good => "高能日",
            Self::Average => "平稳日",
            Self::Poor => "休息日",
            Self::Critical => "低谷期",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "今天您的生物节律状态极佳，是展现卓越表现的绝佳时机！",
            Self::Good => "今天状态良好，适合处理重要事务和创造性工作。",
            Self::Average => "今天状态平稳，适合正常工作和生活。",
            Self::Poor => "今天建议适当休息，避免高强度活动。",
            Self::Critical => "今天是节律低谷期，建议以休息为主。",
        }
    }
}

/// Status word for a single cycle value.
pub fn rhythm_status(value: i32) -> &'static str {
    let positive = value > 0;
    match value.abs() {
        v if v >= 90 => if positive { "极佳" } else { "极差" },
        v if v >= 70 => if positive { "很好" } else { "很差" },
        v if v >= 50 => if positive { "良好" } else { "较差" },
        v if v >= 30 => if positive { "一般" } else { "一般偏低" },
        _ => "平稳期",
    }
}

/// Human-readable summary of one day's reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiorhythmSummary {
    pub level: DayLevel,
    pub title: &'static str,
    pub description: &'static str,
    pub total_score: i32,
    pub physical_status: &'static str,
    pub emotional_status: &'static str,
    pub intellectual_status: &'static str,
}

impl BiorhythmSummary {
    pub fn of(reading: &BiorhythmReading) -> Self {
        let total = reading.total();
        let level = DayLevel::from_total(total);
        Self {
            level,
            title: level.title(),
            description: level.description(),
            total_score: total,
            physical_status: rhythm_status(reading.physical),
            emotional_status: rhythm_status(reading.emotional),
            intellectual_status: rhythm_status(reading.intellectual),
        }
    }
}
