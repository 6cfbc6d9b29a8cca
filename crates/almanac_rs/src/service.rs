//! The `Almanac` service: request-level operations over shared tables.

use std::path::Path;
use std::sync::Arc;

use almanac_base::{
    BiorhythmSeries, BiorhythmSummary, BirthInfo, DressDayInfo, MayaDayInfo, biorhythm,
    biorhythm_range, birth_info, check_tables, dress_day, dress_range, maya_day, maya_range,
};
use almanac_config::GuideConfig;
use almanac_time::{CalendarDate, DateRange, today};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::AlmanacError;
use crate::history::History;
use crate::outcome::MayaOutcome;

/// Default biorhythm chart window: days before and after today.
pub const BIORHYTHM_WINDOW: (u32, u32) = (10, 20);
/// Default Maya range window.
pub const MAYA_WINDOW: (u32, u32) = (3, 3);
/// Default dress range window.
pub const DRESS_WINDOW: (u32, u32) = (1, 6);

/// Biorhythm values for one day with a readable summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiorhythmDay {
    pub date: CalendarDate,
    pub physical: i32,
    pub emotional: i32,
    pub intellectual: i32,
    pub summary: BiorhythmSummary,
}

/// Maya readings over a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MayaRange {
    pub maya_info_list: Vec<MayaDayInfo>,
    pub date_range: DateRange,
}

/// Dress advice over a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DressRange {
    pub date_range: DateRange,
    pub dress_info_list: Vec<DressDayInfo>,
}

/// Owns the content tables and the query histories.
///
/// Shareable across threads; the histories are the only mutable state.
#[derive(Debug)]
pub struct Almanac {
    config: Arc<GuideConfig>,
    biorhythm_history: History,
    maya_history: History,
}

impl Almanac {
    /// Service over validated tables.
    pub fn new(config: Arc<GuideConfig>) -> Result<Self, AlmanacError> {
        config.validate()?;
        check_tables(&config)?;
        Ok(Self {
            biorhythm_history: History::new(config.biorhythm.max_history),
            maya_history: History::new(config.maya.history_capacity),
            config,
        })
    }

    /// Service over the bundled tables.
    pub fn embedded() -> Result<Self, AlmanacError> {
        let config = GuideConfig::embedded()?;
        info!("loaded embedded almanac tables");
        Self::new(Arc::new(config))
    }

    /// Service over tables read from `path`.
    pub fn from_file(path: &Path) -> Result<Self, AlmanacError> {
        let config = GuideConfig::load(path)?;
        info!(path = %path.display(), "loaded almanac tables");
        Self::new(Arc::new(config))
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    fn parse_date(input: &str, field: &'static str) -> Result<CalendarDate, AlmanacError> {
        CalendarDate::parse(input).map_err(|e| {
            warn!(field, input, "rejected date");
            AlmanacError::from(e)
        })
    }

    // -----------------------------------------------------------------------
    // Biorhythm
    // -----------------------------------------------------------------------

    fn biorhythm_on(&self, birth: CalendarDate, target: CalendarDate) -> BiorhythmDay {
        let reading = biorhythm(&self.config.biorhythm.cycles, birth, target);
        self.biorhythm_history.record(&birth.to_string());
        BiorhythmDay {
            date: target,
            physical: reading.physical,
            emotional: reading.emotional,
            intellectual: reading.intellectual,
            summary: BiorhythmSummary::of(&reading),
        }
    }

    /// Today's biorhythm for someone born on `birth`.
    pub fn biorhythm_today(&self, birth: &str) -> Result<BiorhythmDay, AlmanacError> {
        debug!(birth, "biorhythm today");
        let birth = Self::parse_date(birth, "birth_date")?;
        Ok(self.biorhythm_on(birth, today()))
    }

    /// Biorhythm of `target` for someone born on `birth`.
    pub fn biorhythm(&self, birth: &str, target: &str) -> Result<BiorhythmDay, AlmanacError> {
        debug!(birth, target, "biorhythm");
        let birth = Self::parse_date(birth, "birth_date")?;
        let target = Self::parse_date(target, "date")?;
        Ok(self.biorhythm_on(birth, target))
    }

    /// Series centred on today.
    pub fn biorhythm_range(
        &self,
        birth: &str,
        days_before: u32,
        days_after: u32,
    ) -> Result<BiorhythmSeries, AlmanacError> {
        let center = today();
        self.biorhythm_series(birth, center, days_before, days_after)
    }

    /// Series centred on `center`.
    pub fn biorhythm_range_around(
        &self,
        birth: &str,
        center: &str,
        days_before: u32,
        days_after: u32,
    ) -> Result<BiorhythmSeries, AlmanacError> {
        let center = Self::parse_date(center, "date")?;
        self.biorhythm_series(birth, center, days_before, days_after)
    }

    fn biorhythm_series(
        &self,
        birth: &str,
        center: CalendarDate,
        days_before: u32,
        days_after: u32,
    ) -> Result<BiorhythmSeries, AlmanacError> {
        debug!(birth, %center, days_before, days_after, "biorhythm range");
        let birth = Self::parse_date(birth, "birth_date")?;
        let range = DateRange::around(center, days_before, days_after)?;
        let series = biorhythm_range(&self.config.biorhythm.cycles, birth, &range);
        self.biorhythm_history.record(&birth.to_string());
        Ok(series)
    }

    /// Recently queried birth dates, most recent first.
    pub fn biorhythm_history(&self) -> Vec<String> {
        self.biorhythm_history.snapshot()
    }

    // -----------------------------------------------------------------------
    // Maya
    // -----------------------------------------------------------------------

    pub fn maya_today(&self) -> MayaOutcome<MayaDayInfo> {
        debug!("maya today");
        maya_day(&self.config.maya, today()).into()
    }

    pub fn maya_info(&self, date: &str) -> MayaOutcome<MayaDayInfo> {
        debug!(date, "maya info");
        Self::parse_date(date, "date")
            .and_then(|date| Ok(maya_day(&self.config.maya, date)?))
            .into()
    }

    /// Readings centred on today.
    pub fn maya_range(&self, days_before: u32, days_after: u32) -> MayaOutcome<MayaRange> {
        self.maya_window(today(), days_before, days_after).into()
    }

    /// Readings centred on `center`.
    pub fn maya_range_around(
        &self,
        center: &str,
        days_before: u32,
        days_after: u32,
    ) -> MayaOutcome<MayaRange> {
        Self::parse_date(center, "date")
            .and_then(|center| self.maya_window(center, days_before, days_after))
            .into()
    }

    fn maya_window(
        &self,
        center: CalendarDate,
        days_before: u32,
        days_after: u32,
    ) -> Result<MayaRange, AlmanacError> {
        debug!(%center, days_before, days_after, "maya range");
        let range = DateRange::around(center, days_before, days_after)?;
        Ok(MayaRange {
            maya_info_list: maya_range(&self.config.maya, &range)?,
            date_range: range,
        })
    }

    /// Birth reading; a missing or malformed birth date is reported in-band.
    pub fn maya_birth_info(&self, birth: Option<&str>) -> MayaOutcome<BirthInfo> {
        debug!(?birth, "maya birth info");
        let result = birth
            .ok_or_else(|| {
                warn!("birth info request without birth_date");
                AlmanacError::MissingRequiredField("birth_date")
            })
            .and_then(|birth| Self::parse_date(birth, "birth_date"))
            .and_then(|birth| {
                let info = birth_info(&self.config.maya, birth)?;
                self.maya_history.record(&birth.to_string());
                Ok(info)
            });
        result.into()
    }

    /// Recently queried birth dates, most recent first.
    pub fn maya_history(&self) -> Vec<String> {
        self.maya_history.snapshot()
    }

    // -----------------------------------------------------------------------
    // Dress
    // -----------------------------------------------------------------------

    pub fn dress_today(&self) -> Result<DressDayInfo, AlmanacError> {
        debug!("dress today");
        Ok(dress_day(&self.config.dress, today())?)
    }

    pub fn dress_info(&self, date: &str) -> Result<DressDayInfo, AlmanacError> {
        debug!(date, "dress info");
        let date = Self::parse_date(date, "date")?;
        Ok(dress_day(&self.config.dress, date)?)
    }

    /// Advice centred on today.
    pub fn dress_range(&self, days_before: u32, days_after: u32) -> Result<DressRange, AlmanacError> {
        self.dress_window(today(), days_before, days_after)
    }

    /// Advice centred on `center`.
    pub fn dress_range_around(
        &self,
        center: &str,
        days_before: u32,
        days_after: u32,
    ) -> Result<DressRange, AlmanacError> {
        let center = Self::parse_date(center, "date")?;
        self.dress_window(center, days_before, days_after)
    }

    fn dress_window(
        &self,
        center: CalendarDate,
        days_before: u32,
        days_after: u32,
    ) -> Result<DressRange, AlmanacError> {
        debug!(%center, days_before, days_after, "dress range");
        let range = DateRange::around(center, days_before, days_after)?;
        Ok(DressRange {
            dress_info_list: dress_range(&self.config.dress, &range)?,
            date_range: range,
        })
    }
}
