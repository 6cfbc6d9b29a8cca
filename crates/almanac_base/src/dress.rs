//! Five-element dress and diet advice.
//!
//! The day element starts from the weekday's element and is shifted by a
//! date hash. Colour systems are then judged by their element's relation to
//! the day element, with a seeded 10% chance per system and day of
//! softening or hardening the verdict.

use almanac_config::{ColorSystem, DressConfig};
use almanac_time::{CalendarDate, DateRange, weekday_name};
use serde::Serialize;

use crate::element::{ElementRelation, FiveElement, Luck};
use crate::error::EngineError;
use crate::seed::{date_seed, label_hash, lcg_draws, pick};

fn element_of(label: &str) -> Result<FiveElement, EngineError> {
    FiveElement::from_label(label).ok_or_else(|| EngineError::UnknownElement(label.to_owned()))
}

/// Resolve every element label the dress tables use.
pub fn check_dress_tables(config: &DressConfig) -> Result<(), EngineError> {
    let labels = config
        .elements
        .iter()
        .map(|e| e.name.as_str())
        .chain(config.color_systems.iter().map(|s| s.element.as_str()))
        .chain(config.weekday_elements.iter().map(String::as_str));
    for label in labels {
        element_of(label)?;
    }
    Ok(())
}

/// Element governing `date`.
pub fn day_element(config: &DressConfig, date: CalendarDate) -> Result<FiveElement, EngineError> {
    let base_label = config
        .weekday_elements
        .get(date.weekday_index())
        .ok_or(EngineError::EmptyTable("dress.weekday_elements"))?;
    let base = element_of(base_label)?;

    let hash = (i64::from(date.day()) * 100
        + i64::from(date.month()) * 10
        + i64::from(date.year()).rem_euclid(10))
        % 5;
    if hash == 0 {
        return Ok(base);
    }

    let mut others = Vec::with_capacity(4);
    for record in &config.elements {
        let element = element_of(&record.name)?;
        if element != base {
            others.push(element);
        }
    }
    pick(&others, hash - 1)
        .copied()
        .ok_or(EngineError::EmptyTable("dress.elements"))
}

/// Per-system draws for one day.
///
/// The first LCG step of consecutive seeds lands on nearly equal states,
/// so it is discarded.
#[derive(Debug, Clone, Copy)]
struct Draws {
    flip: f64,
    template: f64,
    side: f64,
    flavour: f64,
}

impl Draws {
    fn new(seed: i64) -> Self {
        let [_, flip, template, side, flavour] = lcg_draws::<5>(seed);
        Self {
            flip,
            template,
            side,
            flavour,
        }
    }
}

/// Bucket of a unit draw among `n`.
fn bucket(unit: f64, n: usize) -> usize {
    ((unit * n as f64) as usize).min(n - 1)
}

/// Luck after the seeded flip: one day in ten moves towards (or away
/// from) neutral.
fn seeded_luck(base: Luck, draws: &Draws) -> Luck {
    if draws.flip >= 0.1 {
        return base;
    }
    match base {
        Luck::Favorable | Luck::Unfavorable => Luck::Neutral,
        Luck::Neutral if draws.side < 0.5 => Luck::Favorable,
        Luck::Neutral => Luck::Unfavorable,
    }
}

fn describe(relation: &str, luck: &str, draws: &Draws) -> String {
    const OCCASIONS: [&str; 4] = ["专注", "放松", "社交", "思考"];
    const EFFECTS: [&str; 4] = ["提升运势", "增强气场", "改善心情", "促进交流"];
    let flavour = bucket(draws.flavour, 4);
    match bucket(draws.template, 5) {
        0 => format!("于当日五行{relation}，{luck}相宜。今日若身着此类衣物配饰，有助于提升个人气场。"),
        1 => format!("今日五行{relation}，整体环境{luck}。此颜色系能够帮助你更好地适应今天的能量场。"),
        2 => format!("当日五行与此颜色{relation}，{luck}。穿着此类颜色有助于调和今日的能量。"),
        3 => format!("此颜色与今日五行{relation}，{luck}。适合需要{}的场合。", OCCASIONS[flavour]),
        _ => format!("今日此颜色{luck}，与当日五行{relation}。可以{}。", EFFECTS[flavour]),
    }
}

/// Verdict on one colour system for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSuggestion {
    #[serde(rename = "颜色系统")]
    pub system: String,
    #[serde(rename = "具体颜色")]
    pub colors: Vec<String>,
    #[serde(skip)]
    pub relation: ElementRelation,
    /// "与当日五行{relation}".
    #[serde(rename = "五行关系")]
    pub relation_text: String,
    #[serde(rename = "吉凶")]
    pub luck: Luck,
    #[serde(rename = "描述")]
    pub description: String,
}

fn judge_system(
    system: &ColorSystem,
    day: FiveElement,
    date: CalendarDate,
) -> Result<ColorSuggestion, EngineError> {
    let relation = ElementRelation::between(day, element_of(&system.element)?);
    let draws = Draws::new(date_seed(date, i64::from(label_hash(&system.name))));
    let luck = seeded_luck(relation.base_luck(), &draws);
    Ok(ColorSuggestion {
        system: system.name.clone(),
        colors: system.colors.clone(),
        relation,
        relation_text: format!("与当日五行{}", relation.label()),
        luck,
        description: describe(relation.label(), luck.label(), &draws),
    })
}

/// One suggestion per configured colour system, in table order.
pub fn color_suggestions(
    config: &DressConfig,
    date: CalendarDate,
) -> Result<Vec<ColorSuggestion>, EngineError> {
    let day = day_element(config, date)?;
    config
        .color_systems
        .iter()
        .map(|system| judge_system(system, day, date))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodSuggestions {
    #[serde(rename = "宜")]
    pub favor: Vec<String>,
    #[serde(rename = "忌")]
    pub avoid: Vec<String>,
}

/// First two weekday items plus one seeded pick from the rest of `pool`.
fn daily_foods<'a>(
    weekday_items: &[String],
    pool: impl Iterator<Item = &'a String>,
    seed: i64,
) -> Vec<String> {
    let mut chosen: Vec<String> = weekday_items.iter().take(2).cloned().collect();
    let mut remaining: Vec<&String> = Vec::new();
    for item in pool {
        if !chosen.contains(item) && !remaining.contains(&item) {
            remaining.push(item);
        }
    }
    if let Some(extra) = pick(&remaining, seed) {
        chosen.push((*extra).clone());
    }
    chosen
}

pub fn food_suggestions(
    config: &DressConfig,
    date: CalendarDate,
) -> Result<FoodSuggestions, EngineError> {
    let today = config
        .weekday_food
        .get(date.weekday_index())
        .ok_or(EngineError::EmptyTable("dress.weekday_food"))?;
    let seed = date_seed(date, 0);
    let lists = &config.weekday_food;
    Ok(FoodSuggestions {
        favor: daily_foods(&today.favor, lists.iter().flat_map(|l| &l.favor), seed),
        avoid: daily_foods(&today.avoid, lists.iter().flat_map(|l| &l.avoid), seed),
    })
}

/// Colour systems in harmony with the day element, plus the day's star
/// colour.
pub fn recommended_color_systems(
    config: &DressConfig,
    date: CalendarDate,
) -> Result<Vec<String>, EngineError> {
    let day = day_element(config, date)?;
    let mut systems = Vec::new();
    for system in &config.color_systems {
        let relation = ElementRelation::between(day, element_of(&system.element)?);
        if matches!(
            relation,
            ElementRelation::Same | ElementRelation::Generates | ElementRelation::GeneratedBy
        ) {
            systems.push(system.name.clone());
        }
    }
    let star_seed = i64::from(date.ordinal()) + i64::from(date.day() * date.month());
    if let Some(star) = pick(&config.star_colors, star_seed) {
        if !systems.contains(star) {
            systems.push(star.clone());
        }
    }
    Ok(systems)
}

/// Dress and diet advice for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DressDayInfo {
    pub date: CalendarDate,
    pub weekday: &'static str,
    pub daily_element: FiveElement,
    pub color_suggestions: Vec<ColorSuggestion>,
    pub food_suggestions: FoodSuggestions,
    pub recommended_colors: Vec<String>,
}

pub fn dress_day(config: &DressConfig, date: CalendarDate) -> Result<DressDayInfo, EngineError> {
    Ok(DressDayInfo {
        date,
        weekday: weekday_name(date),
        daily_element: day_element(config, date)?,
        color_suggestions: color_suggestions(config, date)?,
        food_suggestions: food_suggestions(config, date)?,
        recommended_colors: recommended_color_systems(config, date)?,
    })
}

/// Advice for every day of `range`, in calendar order.
pub fn dress_range(
    config: &DressConfig,
    range: &DateRange,
) -> Result<Vec<DressDayInfo>, EngineError> {
    range.iter().map(|date| dress_day(config, date)).collect()
}
