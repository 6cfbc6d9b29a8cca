//! Table schemas for each section of the config document.

use almanac_time::CalendarDate;
use serde::{Deserialize, Serialize};

/// Biorhythm settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BiorhythmConfig {
    pub cycles: CycleLengths,
    /// Capacity of the recent birth-date history.
    #[serde(default = "default_biorhythm_history")]
    pub max_history: usize,
}

/// Period, in days, of each biorhythm cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CycleLengths {
    pub physical: u32,
    pub emotional: u32,
    pub intellectual: u32,
}

impl Default for CycleLengths {
    fn default() -> Self {
        Self {
            physical: 23,
            emotional: 28,
            intellectual: 33,
        }
    }
}

fn default_biorhythm_history() -> usize {
    10
}

fn default_maya_history() -> usize {
    6
}

/// Maya calendar content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MayaConfig {
    /// Day whose kin is `reference_kin`.
    pub reference_date: CalendarDate,
    pub reference_kin: u16,
    #[serde(default = "default_maya_history")]
    pub history_capacity: usize,
    /// The 13 moon names, in order.
    pub months: Vec<String>,
    /// Seal attribute records, positional (index 0 = first seal).
    pub seals: Vec<SealRecord>,
    /// Tone attribute records, positional (index 0 = first tone).
    pub tones: Vec<ToneRecord>,
    pub suggestions: Vec<String>,
    pub avoidances: Vec<String>,
    pub lucky_colors: Vec<String>,
    pub lucky_numbers: Vec<String>,
    pub lucky_foods: Vec<String>,
    pub messages: Vec<String>,
    pub quotes: Vec<String>,
    pub key_dates: KeyDates,
    pub energy_fields: Vec<EnergyField>,
}

/// Static attributes of one seal.
///
/// `traits` and `energy` are `、`-delimited lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SealRecord {
    pub name: String,
    pub traits: String,
    pub energy: String,
    pub keyword: String,
}

/// Static attributes of one tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneRecord {
    pub name: String,
    pub essence: String,
    pub action: String,
    pub question: String,
}

/// Descriptions for the four seasonal marker days.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyDates {
    pub spring: String,
    pub summer: String,
    pub autumn: String,
    pub winter: String,
}

/// One named energy field used by birth readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnergyField {
    pub name: String,
    pub description: String,
    pub scope: String,
    pub practice: String,
}

/// Five-element dress and diet content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DressConfig {
    /// The five elements with their representative colours.
    pub elements: Vec<ElementRecord>,
    pub color_systems: Vec<ColorSystem>,
    /// Base element per weekday, Monday first.
    pub weekday_elements: Vec<String>,
    pub star_colors: Vec<String>,
    /// Favoured / avoided foods per weekday, Monday first.
    pub weekday_food: Vec<FoodList>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementRecord {
    pub name: String,
    pub colors: Vec<String>,
}

/// A family of clothing colours attached to one element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorSystem {
    pub name: String,
    pub element: String,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FoodList {
    pub favor: Vec<String>,
    pub avoid: Vec<String>,
}
