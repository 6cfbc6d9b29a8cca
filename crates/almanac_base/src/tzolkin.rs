//! Tzolk'in (260-day cycle): kin number, solar seal and galactic tone.
//!
//! The cycle is anchored to a modern reference day rather than the Long
//! Count. The tables carry the anchor; the default is 2025-09-23 = kin 183
//! (磁性的蓝夜). Seal and tone are the kin taken modulo 20 and 13.

use almanac_time::CalendarDate;
use serde::{Serialize, Serializer};

/// Length of the Tzolk'in cycle in days.
pub const TZOLKIN_CYCLE: i64 = 260;

/// Proleptic Gregorian ordinal (0001-01-01 = 1) of the default anchor day,
/// 2025-09-23.
pub const REFERENCE_ORDINAL: i64 = 739_517;

/// Kin of the default anchor day.
pub const REFERENCE_KIN: u16 = 183;

fn wrap_kin(kin: i64) -> u16 {
    ((kin - 1).rem_euclid(TZOLKIN_CYCLE) + 1) as u16
}

/// A day whose kin is known, from which every other kin is counted.
///
/// Engines take the epoch from the tables (`maya::kin_epoch`);
/// [`KinEpoch::DEFAULT`] is the anchor the bundled tables ship with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KinEpoch {
    ordinal: i64,
    kin: u16,
}

impl KinEpoch {
    /// 2025-09-23 = kin 183.
    pub const DEFAULT: Self = Self {
        ordinal: REFERENCE_ORDINAL,
        kin: REFERENCE_KIN,
    };

    pub fn new(date: CalendarDate, kin: u16) -> Self {
        Self {
            ordinal: date.proleptic_ordinal(),
            kin,
        }
    }

    /// Kin of the anchor day.
    pub fn kin(&self) -> u16 {
        self.kin
    }

    /// Kin (1..=260) of `date`.
    pub fn kin_of(&self, date: CalendarDate) -> u16 {
        wrap_kin(i64::from(self.kin) + date.proleptic_ordinal() - self.ordinal)
    }
}

impl Default for KinEpoch {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Kin of `date` against [`KinEpoch::DEFAULT`].
///
/// Only agrees with `maya_day` while the tables keep the default anchor;
/// configured callers use `maya::kin_epoch(config).kin_of(date)`.
pub fn kin_number(date: CalendarDate) -> u16 {
    KinEpoch::DEFAULT.kin_of(date)
}

/// The 20 solar seals, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Seal {
    RedDragon,
    WhiteWind,
    BlueNight,
    YellowSeed,
    RedSerpent,
    WhiteWorldBridger,
    BlueHand,
    YellowStar,
    RedMoon,
    WhiteDog,
    BlueMonkey,
    YellowHuman,
    RedSkywalker,
    WhiteWizard,
    BlueEagle,
    YellowWarrior,
    RedEarth,
    WhiteMirror,
    BlueStorm,
    YellowSun,
}

/// All 20 seals in order (index 0 = Red Dragon).
pub const ALL_SEALS: [Seal; 20] = [
    Seal::RedDragon,
    Seal::WhiteWind,
    Seal::BlueNight,
    Seal::YellowSeed,
    Seal::RedSerpent,
    Seal::WhiteWorldBridger,
    Seal::BlueHand,
    Seal::YellowStar,
    Seal::RedMoon,
    Seal::WhiteDog,
    Seal::BlueMonkey,
    Seal::YellowHuman,
    Seal::RedSkywalker,
    Seal::WhiteWizard,
    Seal::BlueEagle,
    Seal::YellowWarrior,
    Seal::RedEarth,
    Seal::WhiteMirror,
    Seal::BlueStorm,
    Seal::YellowSun,
];

const SEAL_LABELS: [&str; 20] = [
    "红龙", "白风", "蓝夜", "黄种子", "红蛇", "白世界桥", "蓝手", "黄星星", "红月", "白狗",
    "蓝猴", "黄人", "红天行者", "白巫师", "蓝鹰", "黄战士", "红地球", "白镜", "蓝风暴", "黄太阳",
];

impl Seal {
    /// Seal of a kin: index `(kin - 1) mod 20`.
    pub fn from_kin(kin: u16) -> Self {
        ALL_SEALS[(i64::from(kin) - 1).rem_euclid(20) as usize]
    }

    /// 0-based index (Red Dragon = 0 .. Yellow Sun = 19).
    pub fn index(self) -> usize {
        ALL_SEALS
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        SEAL_LABELS[self.index()]
    }
}

impl Serialize for Seal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// The 13 galactic tones, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Tone {
    Magnetic,
    Lunar,
    Electric,
    SelfExisting,
    Overtone,
    Rhythmic,
    Resonant,
    Galactic,
    Solar,
    Planetary,
    Spectral,
    Crystal,
    Cosmic,
}

/// All 13 tones in order (index 0 = Magnetic).
pub const ALL_TONES: [Tone; 13] = [
    Tone::Magnetic,
    Tone::Lunar,
    Tone::Electric,
    Tone::SelfExisting,
    Tone::Overtone,
    Tone::Rhythmic,
    Tone::Resonant,
    Tone::Galactic,
    Tone::Solar,
    Tone::Planetary,
    Tone::Spectral,
    Tone::Crystal,
    Tone::Cosmic,
];

const TONE_LABELS: [&str; 13] = [
    "磁性", "月亮", "电力", "自我存在", "超频", "韵律", "共振", "银河", "太阳", "行星", "光谱",
    "水晶", "宇宙",
];

impl Tone {
    /// Tone of a kin: index `(kin - 1) mod 13`.
    pub fn from_kin(kin: u16) -> Self {
        ALL_TONES[(i64::from(kin) - 1).rem_euclid(13) as usize]
    }

    /// 0-based index (Magnetic = 0 .. Cosmic = 12).
    pub fn index(self) -> usize {
        ALL_TONES
            .iter()
            .position(|t| *t == self)
            .unwrap_or_default()
    }

    /// Tone number as used in the Dreamspell (1..=13).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn label(self) -> &'static str {
        TONE_LABELS[self.index()]
    }
}

impl Serialize for Tone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Kin with its seal and tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TzolkinDay {
    pub kin: u16,
    pub seal: Seal,
    pub tone: Tone,
}

impl TzolkinDay {
    pub fn from_kin(kin: u16) -> Self {
        Self {
            kin,
            seal: Seal::from_kin(kin),
            tone: Tone::from_kin(kin),
        }
    }

    /// "{tone}的{seal}", e.g. 磁性的蓝夜.
    pub fn full_name(&self) -> String {
        format!("{}的{}", self.tone.label(), self.seal.label())
    }
}
