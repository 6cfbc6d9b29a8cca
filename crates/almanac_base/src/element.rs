//! The five elements and their generative / destructive cycles.
//!
//! Generative: Metal → Water → Wood → Fire → Earth → Metal.
//! Destructive: Metal → Wood → Earth → Water → Fire → Metal.

use serde::{Serialize, Serializer};

/// The five elements (五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiveElement {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

/// All elements in table order (金, 木, 水, 火, 土).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Metal,
    FiveElement::Wood,
    FiveElement::Water,
    FiveElement::Fire,
    FiveElement::Earth,
];

const ELEMENT_LABELS: [&str; 5] = ["金", "木", "水", "火", "土"];

impl FiveElement {
    /// 0-based index in table order.
    pub const fn index(self) -> usize {
        match self {
            Self::Metal => 0,
            Self::Wood => 1,
            Self::Water => 2,
            Self::Fire => 3,
            Self::Earth => 4,
        }
    }

    pub fn label(self) -> &'static str {
        ELEMENT_LABELS[self.index()]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        ELEMENT_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| ALL_ELEMENTS[i])
    }

    /// The element this one generates (生).
    pub const fn generates(self) -> Self {
        match self {
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
        }
    }

    /// The element this one overcomes (克).
    pub const fn overcomes(self) -> Self {
        match self {
            Self::Metal => Self::Wood,
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
        }
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        match self {
            Self::Water => Self::Metal,
            Self::Wood => Self::Water,
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
        }
    }

    /// The element that overcomes this one.
    pub const fn overcome_by(self) -> Self {
        match self {
            Self::Wood => Self::Metal,
            Self::Earth => Self::Wood,
            Self::Water => Self::Earth,
            Self::Fire => Self::Water,
            Self::Metal => Self::Fire,
        }
    }
}

impl Serialize for FiveElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// How another element stands relative to the day's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    Same,
    /// The day element generates the other.
    Generates,
    /// The other element generates the day element.
    GeneratedBy,
    /// The day element overcomes the other.
    Overcomes,
    /// The other element overcomes the day element.
    OvercomeBy,
}

impl ElementRelation {
    /// Classify `other` against `day`. With five elements every pair falls
    /// into exactly one variant.
    pub fn between(day: FiveElement, other: FiveElement) -> Self {
        if day == other {
            Self::Same
        } else if day.generates() == other {
            Self::Generates
        } else if other.generates() == day {
            Self::GeneratedBy
        } else if day.overcomes() == other {
            Self::Overcomes
        } else {
            Self::OvercomeBy
        }
    }

    /// Display label; both generative directions read as 相生.
    pub fn label(self) -> &'static str {
        match self {
            Self::Same => "相同",
            Self::Generates | Self::GeneratedBy => "相生",
            Self::Overcomes => "相克",
            Self::OvercomeBy => "被克",
        }
    }

    /// Luck before any per-day variation.
    pub fn base_luck(self) -> Luck {
        match self {
            Self::Same | Self::Generates | Self::GeneratedBy => Luck::Favorable,
            Self::OvercomeBy => Luck::Unfavorable,
            Self::Overcomes => Luck::Neutral,
        }
    }
}

/// Luck label attached to a colour suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Luck {
    Favorable,
    Neutral,
    Unfavorable,
}

impl Luck {
    pub fn label(self) -> &'static str {
        match self {
            Self::Favorable => "吉",
            Self::Neutral => "中性",
            Self::Unfavorable => "不吉",
        }
    }
}

impl Serialize for Luck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index(), i);
        }
    }

    #[test]
    fn labels_round_trip() {
        for e in ALL_ELEMENTS {
            assert_eq!(FiveElement::from_label(e.label()), Some(e));
        }
        assert_eq!(FiveElement::from_label("雷"), None);
    }

    #[test]
    fn cycles_are_fixed_point_free_permutations() {
        let steps: [fn(FiveElement) -> FiveElement; 2] =
            [FiveElement::generates, FiveElement::overcomes];
        for step in steps {
            let mut seen = [false; 5];
            for e in ALL_ELEMENTS {
                let next = step(e);
                assert_ne!(next, e);
                assert!(!seen[next.index()], "{next:?} reached twice");
                seen[next.index()] = true;
            }
            // a single 5-cycle: five steps return to the start
            let mut e = FiveElement::Metal;
            for _ in 0..5 {
                e = step(e);
            }
            assert_eq!(e, FiveElement::Metal);
        }
    }

    #[test]
    fn inverse_relations() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.overcomes().overcome_by(), e);
        }
    }

    #[test]
    fn cycles_are_disjoint() {
        for e in ALL_ELEMENTS {
            assert_ne!(e.generates(), e.overcomes());
        }
    }

    #[test]
    fn relation_covers_every_pair_once() {
        for day in ALL_ELEMENTS {
            let mut counts = [0usize; 5];
            for other in ALL_ELEMENTS {
                let idx = match ElementRelation::between(day, other) {
                    ElementRelation::Same => 0,
                    ElementRelation::Generates => 1,
                    ElementRelation::GeneratedBy => 2,
                    ElementRelation::Overcomes => 3,
                    ElementRelation::OvercomeBy => 4,
                };
                counts[idx] += 1;
            }
            assert_eq!(counts, [1; 5], "day {day:?}");
        }
    }

    #[test]
    fn metal_day_relations() {
        let day = FiveElement::Metal;
        assert_eq!(ElementRelation::between(day, FiveElement::Water), ElementRelation::Generates);
        assert_eq!(ElementRelation::between(day, FiveElement::Earth), ElementRelation::GeneratedBy);
        assert_eq!(ElementRelation::between(day, FiveElement::Wood), ElementRelation::Overcomes);
        assert_eq!(ElementRelation::between(day, FiveElement::Fire), ElementRelation::OvercomeBy);
    }

    #[test]
    fn base_luck_mapping() {
        assert_eq!(ElementRelation::Same.base_luck(), Luck::Favorable);
        assert_eq!(ElementRelation::GeneratedBy.base_luck(), Luck::Favorable);
        assert_eq!(ElementRelation::Overcomes.base_luck(), Luck::Neutral);
        assert_eq!(ElementRelation::OvercomeBy.base_luck(), Luck::Unfavorable);
    }
}
