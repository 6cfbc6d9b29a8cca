//! Content tables for the almanac engines.
//!
//! The tables (cycle lengths, seal/tone attributes, suggestion banks,
//! colour systems, weekday foods) are data, not algorithm. A default set is
//! compiled into the crate from `data/almanac.toml`; callers may load a
//! replacement file instead. Either way the result is validated once and
//! then treated as immutable for the life of the process.

pub mod error;
pub mod tables;

use std::path::Path;

use serde::Deserialize;

pub use error::ConfigError;
pub use tables::{
    BiorhythmConfig, ColorSystem, CycleLengths, DressConfig, ElementRecord, EnergyField,
    FoodList, KeyDates, MayaConfig, SealRecord, ToneRecord,
};

const EMBEDDED_TABLES: &str = include_str!("../data/almanac.toml");

/// Every table the engines read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuideConfig {
    pub biorhythm: BiorhythmConfig,
    pub maya: MayaConfig,
    pub dress: DressConfig,
}

impl GuideConfig {
    /// The tables bundled with the crate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_TABLES)
    }

    /// Read and validate a TOML table file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check table sizes and cross references.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cycles = self.biorhythm.cycles;
        if cycles.physical == 0 || cycles.emotional == 0 || cycles.intellectual == 0 {
            return Err(invalid("biorhythm cycle lengths must be positive"));
        }
        if self.biorhythm.max_history == 0 {
            return Err(invalid("biorhythm.max_history must be positive"));
        }

        let maya = &self.maya;
        if !(1..=260).contains(&maya.reference_kin) {
            return Err(invalid(format!(
                "maya.reference_kin must be in 1..=260, got {}",
                maya.reference_kin
            )));
        }
        if maya.history_capacity == 0 {
            return Err(invalid("maya.history_capacity must be positive"));
        }
        expect_len("maya.months", maya.months.len(), 13)?;
        expect_len("maya.seals", maya.seals.len(), 20)?;
        expect_len("maya.tones", maya.tones.len(), 13)?;
        for (name, len) in [
            ("maya.suggestions", maya.suggestions.len()),
            ("maya.avoidances", maya.avoidances.len()),
            ("maya.lucky_colors", maya.lucky_colors.len()),
            ("maya.lucky_numbers", maya.lucky_numbers.len()),
            ("maya.lucky_foods", maya.lucky_foods.len()),
            ("maya.messages", maya.messages.len()),
            ("maya.quotes", maya.quotes.len()),
        ] {
            if len == 0 {
                return Err(invalid(format!("{name} must not be empty")));
            }
        }
        if maya.energy_fields.len() < 2 {
            return Err(invalid("maya.energy_fields needs at least two entries"));
        }

        let dress = &self.dress;
        expect_len("dress.elements", dress.elements.len(), 5)?;
        expect_len("dress.weekday_elements", dress.weekday_elements.len(), 7)?;
        expect_len("dress.weekday_food", dress.weekday_food.len(), 7)?;
        if dress.color_systems.is_empty() {
            return Err(invalid("dress.color_systems must not be empty"));
        }
        if dress.star_colors.is_empty() {
            return Err(invalid("dress.star_colors must not be empty"));
        }
        for (i, a) in dress.elements.iter().enumerate() {
            if dress.elements[..i].iter().any(|b| b.name == a.name) {
                return Err(invalid(format!("duplicate element {:?}", a.name)));
            }
        }
        let known = |label: &str| dress.elements.iter().any(|e| e.name == label);
        for label in &dress.weekday_elements {
            if !known(label) {
                return Err(invalid(format!("unknown weekday element {label:?}")));
            }
        }
        for system in &dress.color_systems {
            if !known(&system.element) {
                return Err(invalid(format!(
                    "colour system {:?} references unknown element {:?}",
                    system.name, system.element
                )));
            }
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

fn expect_len(table: &str, found: usize, expected: usize) -> Result<(), ConfigError> {
    if found == expected {
        Ok(())
    } else {
        Err(invalid(format!(
            "{table} needs {expected} entries, found {found}"
        )))
    }
}
