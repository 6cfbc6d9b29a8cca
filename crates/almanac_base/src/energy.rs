//! Daily energy scores for five life areas.
//!
//! Each score blends a smooth periodic base (day of year, a 30-day "moon"
//! ramp) with a per-category periodic adjustment and an LCG perturbation in
//! [-8, 8), then clamps to [50, 95]. Rounding is half-to-even.

use std::f64::consts::PI;

use almanac_time::CalendarDate;
use serde::Serialize;

use crate::seed::{date_seed, label_hash, lcg_unit};

/// Lowest possible score.
pub const SCORE_MIN: f64 = 50.0;
/// Highest possible score.
pub const SCORE_MAX: f64 = 95.0;

/// Life areas, in response order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyCategory {
    Overall,
    Love,
    Wealth,
    Career,
    Study,
}

pub const ALL_CATEGORIES: [EnergyCategory; 5] = [
    EnergyCategory::Overall,
    EnergyCategory::Love,
    EnergyCategory::Wealth,
    EnergyCategory::Career,
    EnergyCategory::Study,
];

impl EnergyCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overall => "综合",
            Self::Love => "爱情",
            Self::Wealth => "财富",
            Self::Career => "事业",
            Self::Study => "学习",
        }
    }

    /// Periodic adjustment added to the base energy.
    fn adjustment(self, date: CalendarDate, kin: u16) -> f64 {
        let tau = 2.0 * PI;
        match self {
            Self::Overall => 0.0,
            Self::Love => 3.0 * (tau * f64::from(date.month()) / 12.0).sin(),
            Self::Wealth => 4.0 * (tau * f64::from(date.day()) / 31.0).cos(),
            Self::Career => 3.0 * (tau * f64::from(kin) / 260.0).sin(),
            Self::Study => 4.0 * (tau * f64::from(date.ordinal()) / 365.0).cos(),
        }
    }

    /// Advice text for a score: bands at 80 and 65.
    pub fn suggestion(self, score: u8) -> &'static str {
        let band = match score {
            s if s >= 80 => 0,
            s if s >= 65 => 1,
            _ => 2,
        };
        let texts: [&str; 3] = match self {
            Self::Overall => [
                "今天整体能量很高，适合开展各种活动，充分利用这一天",
                "今天能量平稳，保持平衡的心态，可以顺利完成计划",
                "今天能量较低，注意休息，避免过度消耗",
            ],
            Self::Love => [
                "今天爱情能量很高，适合表达感情，增进亲密关系",
                "今天爱情能量平稳，保持真诚沟通，维护感情稳定",
                "今天爱情能量较低，给自己和伴侣一些空间，避免冲突",
            ],
            Self::Wealth => [
                "今天财富能量很高，适合做出财务决策，把握机会",
                "今天财富能量平稳，保持理性消费，关注长期规划",
                "今天财富能量较低，避免重大财务决策，保持节制",
            ],
            Self::Career => [
                "今天事业能量很高，适合开展重要工作，展示才能",
                "今天事业能量平稳，专注当前任务，稳步推进",
                "今天事业能量较低，处理常规事务，避免重大决策",
            ],
            Self::Study => [
                "今天学习能量很高，适合学习新知识，接受挑战",
                "今天学习能量平稳，保持专注，巩固已有知识",
                "今天学习能量较低，适合复习和整理，避免高难度内容",
            ],
        };
        texts[band]
    }
}

/// Advice for a category given by label; unknown labels get a neutral line.
pub fn energy_suggestion(label: &str, score: u8) -> &'static str {
    ALL_CATEGORIES
        .iter()
        .find(|c| c.label() == label)
        .map_or("保持平衡，关注自己的需求", |c| c.suggestion(score))
}

/// One value per life area, serialised under the category labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByCategory<T> {
    #[serde(rename = "综合")]
    pub overall: T,
    #[serde(rename = "爱情")]
    pub love: T,
    #[serde(rename = "财富")]
    pub wealth: T,
    #[serde(rename = "事业")]
    pub career: T,
    #[serde(rename = "学习")]
    pub study: T,
}

impl<T> ByCategory<T> {
    pub fn get(&self, category: EnergyCategory) -> &T {
        match category {
            EnergyCategory::Overall => &self.overall,
            EnergyCategory::Love => &self.love,
            EnergyCategory::Wealth => &self.wealth,
            EnergyCategory::Career => &self.career,
            EnergyCategory::Study => &self.study,
        }
    }

    fn from_fn(mut f: impl FnMut(EnergyCategory) -> T) -> Self {
        Self {
            overall: f(EnergyCategory::Overall),
            love: f(EnergyCategory::Love),
            wealth: f(EnergyCategory::Wealth),
            career: f(EnergyCategory::Career),
            study: f(EnergyCategory::Study),
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ByCategory<U> {
        ByCategory::from_fn(|c| f(self.get(c)))
    }
}

/// Score plus how it moved and what to do about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyDetail {
    pub score: u8,
    /// 上升 when the perturbation is positive, else 下降.
    pub trend: &'static str,
    /// |round(perturbation)|, in 0..=8.
    pub intensity: u8,
    pub suggestion: &'static str,
}

/// Scores and details for all five areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyReport {
    pub scores: ByCategory<u8>,
    pub details: ByCategory<EnergyDetail>,
}

/// Base energy shared by every category.
fn base_energy(date: CalendarDate) -> f64 {
    let doy = f64::from(date.ordinal());
    let solar = (2.0 * PI * doy / 365.0).sin();
    let moon = f64::from(date.ordinal() % 30) / 30.0;
    65.0 + 5.0 * solar + 5.0 * moon
}

/// Perturbation in [-8, 8) for one category.
fn variation(date: CalendarDate, kin: u16, category: EnergyCategory) -> f64 {
    let offset = i64::from(label_hash(category.label()) % 1000) + i64::from(kin);
    lcg_unit(date_seed(date, offset)) * 16.0 - 8.0
}

/// Score and detail of one category.
pub fn energy_detail(date: CalendarDate, kin: u16, category: EnergyCategory) -> EnergyDetail {
    let var = variation(date, kin, category);
    let raw = base_energy(date) + category.adjustment(date, kin) + var;
    let score = raw.clamp(SCORE_MIN, SCORE_MAX).round_ties_even() as u8;
    EnergyDetail {
        score,
        trend: if var > 0.0 { "上升" } else { "下降" },
        intensity: var.round_ties_even().abs() as u8,
        suggestion: category.suggestion(score),
    }
}

/// All five categories for a day.
pub fn energy_scores(date: CalendarDate, kin: u16) -> EnergyReport {
    let details = ByCategory::from_fn(|c| energy_detail(date, kin, c));
    EnergyReport {
        scores: details.map(|d| d.score),
        details,
    }
}
