//! Pure guidance engines over calendar dates.
//!
//! This crate provides:
//! - Biorhythm cycle values, ranges and day summaries
//! - The Maya Tzolk'in kin with its seal and tone, the thirteen-moon month,
//!   daily energy scores, seeded suggestions and birth readings
//! - Five-element day elements with colour and diet advice
//!
//! Every engine is a deterministic function of a date and the content
//! tables from `almanac_config`; nothing here reads the clock or draws
//! entropy.

pub mod biorhythm;
pub mod dress;
pub mod element;
pub mod energy;
pub mod error;
pub mod haab;
pub mod maya;
pub mod seed;
pub mod tzolkin;

use almanac_config::GuideConfig;

pub use biorhythm::{
    BiorhythmReading, BiorhythmSeries, BiorhythmSummary, DayLevel, biorhythm, biorhythm_range,
    rhythm_status, rhythm_value,
};
pub use dress::{
    ColorSuggestion, DressDayInfo, FoodSuggestions, color_suggestions, day_element, dress_day,
    dress_range, food_suggestions, recommended_color_systems,
};
pub use element::{ALL_ELEMENTS, ElementRelation, FiveElement, Luck};
pub use energy::{
    ALL_CATEGORIES, ByCategory, EnergyCategory, EnergyDetail, EnergyReport, energy_scores,
    energy_suggestion,
};
pub use error::EngineError;
pub use haab::{MayaMonth, maya_month};
pub use maya::{
    BirthEnergyField, BirthInfo, DAILY_GUIDANCE, DailyGuidance, LifePurpose, LuckyItems,
    MayaDayInfo, PersonalTraits, SpecialDate, Suggestions, birth_info, kin_epoch, maya_day,
    maya_range,
};
pub use seed::{date_seed, label_hash, lcg_draws, lcg_next, lcg_unit, pick};
pub use tzolkin::{ALL_SEALS, ALL_TONES, KinEpoch, Seal, Tone, TzolkinDay, kin_number};

/// Check that positional tables line up with the fixed enumerations:
/// seal and tone records carry the labels of their index, and every
/// element label used by the dress tables is one of the five elements.
pub fn check_tables(config: &GuideConfig) -> Result<(), EngineError> {
    for seal in ALL_SEALS {
        maya::seal_record(&config.maya, seal)?;
    }
    for tone in ALL_TONES {
        maya::tone_record(&config.maya, tone)?;
    }
    dress::check_dress_tables(&config.dress)
}
