//! Maya day readings and birth readings.
//!
//! Everything here is a pure function of the date and the content tables.
//! The per-day selections (suggestions, lucky items, inspiration) all share
//! one seed, `date_seed(date, kin)`, offset by a fixed stride per table.

use almanac_config::{EnergyField, MayaConfig, SealRecord, ToneRecord};
use almanac_time::{CalendarDate, DateRange, weekday_name};
use serde::Serialize;

use crate::energy::{ByCategory, EnergyDetail, energy_scores};
use crate::error::EngineError;
use crate::haab::{MayaMonth, maya_month};
use crate::seed::{date_seed, pick, pick_index};
use crate::tzolkin::{KinEpoch, Seal, Tone, TzolkinDay};

const SUGGESTION_COUNT: usize = 4;
const AVOIDANCE_COUNT: usize = 3;
const SUGGESTION_PAD: &str = "保持积极的心态，相信自己的能力";
const AVOIDANCE_PAD: &str = "避免过度焦虑和负面思考";

/// Fixed seasonal marker days: (month, day, name).
pub const SEASON_MARKERS: [(u32, u32, &str); 4] = [
    (3, 20, "春分"),
    (6, 21, "夏至"),
    (9, 22, "秋分"),
    (12, 21, "冬至"),
];

/// Kin epoch configured by the tables.
pub fn kin_epoch(config: &MayaConfig) -> KinEpoch {
    KinEpoch::new(config.reference_date, config.reference_kin)
}

/// Attribute record of a seal; the table entry must carry the seal's label.
pub fn seal_record(config: &MayaConfig, seal: Seal) -> Result<&SealRecord, EngineError> {
    let index = seal.index();
    match config.seals.get(index) {
        Some(record) if record.name == seal.label() => Ok(record),
        other => Err(EngineError::TableMismatch {
            table: "maya.seals",
            index,
            expected: seal.label(),
            found: other.map(|r| r.name.clone()).unwrap_or_default(),
        }),
    }
}

/// Attribute record of a tone; the table entry must carry the tone's label.
pub fn tone_record(config: &MayaConfig, tone: Tone) -> Result<&ToneRecord, EngineError> {
    let index = tone.index();
    match config.tones.get(index) {
        Some(record) if record.name == tone.label() => Ok(record),
        other => Err(EngineError::TableMismatch {
            table: "maya.tones",
            index,
            expected: tone.label(),
            found: other.map(|r| r.name.clone()).unwrap_or_default(),
        }),
    }
}

/// Things to do and to avoid today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    #[serde(rename = "建议")]
    pub suggestions: Vec<String>,
    #[serde(rename = "避免")]
    pub avoidances: Vec<String>,
}

/// Up to `count` distinct picks at `seed + offset + stride*i`, padded with
/// `pad` to exactly `count`.
fn pick_distinct(
    items: &[String],
    seed: i64,
    offset: i64,
    stride: i64,
    count: usize,
    pad: &str,
) -> Vec<String> {
    let mut chosen: Vec<String> = Vec::with_capacity(count);
    for i in 0..count as i64 {
        if let Some(item) = pick(items, seed + stride * i + offset) {
            if !chosen.contains(item) {
                chosen.push(item.clone());
            }
        }
    }
    chosen.resize(count, pad.to_owned());
    chosen
}

pub fn suggestions(config: &MayaConfig, date: CalendarDate, kin: u16) -> Suggestions {
    let seed = date_seed(date, i64::from(kin));
    Suggestions {
        suggestions: pick_distinct(&config.suggestions, seed, 0, 17, SUGGESTION_COUNT, SUGGESTION_PAD),
        avoidances: pick_distinct(&config.avoidances, seed, 100, 23, AVOIDANCE_COUNT, AVOIDANCE_PAD),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckyItems {
    #[serde(rename = "幸运色")]
    pub color: String,
    #[serde(rename = "幸运数字")]
    pub number: String,
    #[serde(rename = "幸运食物")]
    pub food: String,
}

pub fn lucky_items(config: &MayaConfig, date: CalendarDate, kin: u16) -> LuckyItems {
    let seed = date_seed(date, i64::from(kin));
    let choose = |items: &[String], offset: i64| pick(items, seed + offset).cloned().unwrap_or_default();
    LuckyItems {
        color: choose(&config.lucky_colors, 0),
        number: choose(&config.lucky_numbers, 37),
        food: choose(&config.lucky_foods, 73),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspiration {
    pub message: String,
    pub quote: String,
}

pub fn daily_inspiration(config: &MayaConfig, date: CalendarDate, kin: u16) -> Inspiration {
    let seed = date_seed(date, i64::from(kin));
    Inspiration {
        message: pick(&config.messages, seed).cloned().unwrap_or_default(),
        quote: pick(&config.quotes, seed + 41).cloned().unwrap_or_default(),
    }
}

/// Seasonal marker falling on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialDate {
    pub name: &'static str,
    pub info: String,
}

/// The seasonal marker on `date`, matched by (month, day) only.
pub fn special_date(config: &MayaConfig, date: CalendarDate) -> Option<SpecialDate> {
    let &(_, _, name) = SEASON_MARKERS
        .iter()
        .find(|(m, d, _)| (*m, *d) == (date.month(), date.day()))?;
    let key_dates = &config.key_dates;
    let info = match name {
        "春分" => &key_dates.spring,
        "夏至" => &key_dates.summer,
        "秋分" => &key_dates.autumn,
        _ => &key_dates.winter,
    };
    Some(SpecialDate {
        name,
        info: info.clone(),
    })
}

/// Fixed advice for three parts of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyGuidance {
    pub morning: &'static str,
    pub afternoon: &'static str,
    pub evening: &'static str,
}

pub const DAILY_GUIDANCE: DailyGuidance = DailyGuidance {
    morning: "保持平静的心态，专注于当下的任务",
    afternoon: "处理重要事务，保持专注和耐心",
    evening: "放松身心，回顾今日的收获和成长",
};

/// Complete reading for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MayaDayInfo {
    pub date: CalendarDate,
    pub weekday: &'static str,
    #[serde(rename = "maya_kin")]
    pub kin: u16,
    #[serde(rename = "maya_tone")]
    pub tone: Tone,
    #[serde(rename = "maya_month")]
    pub month: MayaMonth,
    #[serde(rename = "maya_seal")]
    pub seal: Seal,
    #[serde(rename = "maya_seal_info")]
    pub seal_info: SealRecord,
    #[serde(rename = "maya_tone_info")]
    pub tone_info: ToneRecord,
    /// "{tone}的{seal}".
    #[serde(rename = "maya_seal_desc")]
    pub full_name: String,
    pub suggestions: Suggestions,
    pub lucky_items: LuckyItems,
    pub daily_message: String,
    pub daily_quote: String,
    pub energy_scores: ByCategory<u8>,
    pub energy_details: ByCategory<EnergyDetail>,
    pub special_date: Option<SpecialDate>,
    pub daily_guidance: DailyGuidance,
}

/// Reading for one day.
pub fn maya_day(config: &MayaConfig, date: CalendarDate) -> Result<MayaDayInfo, EngineError> {
    let tzolkin = TzolkinDay::from_kin(kin_epoch(config).kin_of(date));
    let kin = tzolkin.kin;
    let energy = energy_scores(date, kin);
    let inspiration = daily_inspiration(config, date, kin);
    Ok(MayaDayInfo {
        date,
        weekday: weekday_name(date),
        kin,
        tone: tzolkin.tone,
        month: maya_month(date, &config.months),
        seal: tzolkin.seal,
        seal_info: seal_record(config, tzolkin.seal)?.clone(),
        tone_info: tone_record(config, tzolkin.tone)?.clone(),
        full_name: tzolkin.full_name(),
        suggestions: suggestions(config, date, kin),
        lucky_items: lucky_items(config, date, kin),
        daily_message: inspiration.message,
        daily_quote: inspiration.quote,
        energy_scores: energy.scores,
        energy_details: energy.details,
        special_date: special_date(config, date),
        daily_guidance: DAILY_GUIDANCE,
    })
}

/// Readings for every day of `range`, in calendar order.
pub fn maya_range(config: &MayaConfig, range: &DateRange) -> Result<Vec<MayaDayInfo>, EngineError> {
    range.iter().map(|date| maya_day(config, date)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifePurpose {
    pub summary: String,
    pub details: String,
    pub action_guide: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalTraits {
    pub strengths: Vec<String>,
    pub challenges: Vec<&'static str>,
}

const CHALLENGES: [&str; 3] = ["平衡内在需求和外在期望", "克服内向和保守", "避免过度自我保护"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPick {
    #[serde(rename = "type")]
    pub name: String,
    pub info: EnergyField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthEnergyField {
    pub primary: FieldPick,
    pub secondary: FieldPick,
    pub balance_suggestion: String,
}

/// Birth-chart reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthInfo {
    pub date: CalendarDate,
    pub weekday: &'static str,
    #[serde(rename = "maya_kin")]
    pub kin: u16,
    #[serde(rename = "maya_seal")]
    pub seal: Seal,
    #[serde(rename = "maya_seal_desc")]
    pub full_name: String,
    #[serde(rename = "maya_seal_info")]
    pub seal_info: SealRecord,
    #[serde(rename = "maya_tone_info")]
    pub tone_info: ToneRecord,
    pub life_purpose: LifePurpose,
    pub personal_traits: PersonalTraits,
    pub birth_energy_field: BirthEnergyField,
}

fn first_item(list: &str) -> &str {
    list.split('、').next().unwrap_or(list)
}

fn strengths(seal: &SealRecord, tone: &ToneRecord) -> Vec<String> {
    let second_trait = seal.traits.split('、').nth(1).unwrap_or(&seal.traits);
    vec![
        format!("与{}相关的天赋", first_item(&seal.traits)),
        format!("在{}方面的能力", first_item(&seal.energy)),
        format!("体现{}的能力", tone.essence),
        "发现和培养自己独特的才能".to_owned(),
        format!("与{second_trait}相关的天赋"),
    ]
}

/// Primary field at `kin mod N`; secondary from the remaining fields at
/// `(ordinal + kin + 13) mod (N - 1)`.
pub fn birth_energy_field(
    fields: &[EnergyField],
    birth: CalendarDate,
    kin: u16,
) -> Result<BirthEnergyField, EngineError> {
    let empty = || EngineError::EmptyTable("maya.energy_fields");
    let primary_index = pick_index(fields.len(), i64::from(kin)).ok_or_else(empty)?;
    let remaining: Vec<&EnergyField> = fields
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != primary_index)
        .map(|(_, f)| f)
        .collect();
    let seed = birth.proleptic_ordinal() + i64::from(kin) + 13;
    let secondary = *pick(&remaining, seed).ok_or_else(empty)?;
    let primary = &fields[primary_index];
    Ok(BirthEnergyField {
        balance_suggestion: format!(
            "平衡{}和{}的能量，发挥你的最大潜能",
            primary.name, secondary.name
        ),
        primary: FieldPick {
            name: primary.name.clone(),
            info: primary.clone(),
        },
        secondary: FieldPick {
            name: secondary.name.clone(),
            info: secondary.clone(),
        },
    })
}

/// Reading for someone born on `birth`.
pub fn birth_info(config: &MayaConfig, birth: CalendarDate) -> Result<BirthInfo, EngineError> {
    let tzolkin = TzolkinDay::from_kin(kin_epoch(config).kin_of(birth));
    let seal = seal_record(config, tzolkin.seal)?;
    let tone = tone_record(config, tzolkin.tone)?;
    Ok(BirthInfo {
        date: birth,
        weekday: weekday_name(birth),
        kin: tzolkin.kin,
        seal: tzolkin.seal,
        full_name: tzolkin.full_name(),
        seal_info: seal.clone(),
        tone_info: tone.clone(),
        life_purpose: LifePurpose {
            summary: format!("{}的{}代表了一种独特的生命能量", tone.name, seal.name),
            details: format!("你的生命使命与{}有关", seal.traits),
            action_guide: format!("通过{}的方式来实现你的潜能", tone.action),
        },
        personal_traits: PersonalTraits {
            strengths: strengths(seal, tone),
            challenges: CHALLENGES.to_vec(),
        },
        birth_energy_field: birth_energy_field(&config.energy_fields, birth, tzolkin.kin)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_config::GuideConfig;

    fn d(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn tables() -> MayaConfig {
        GuideConfig::embedded().unwrap().maya
    }

    #[test]
    fn reference_day_reading() {
        let info = maya_day(&tables(), d("2025-09-23")).unwrap();
        assert_eq!(info.kin, 183);
        assert_eq!(info.tone, Tone::Magnetic);
        assert_eq!(info.seal, Seal::BlueNight);
        assert_eq!(info.full_name, "磁性的蓝夜");
        assert_eq!(info.seal_info.keyword, "丰盛");
        assert_eq!(info.weekday, "星期二");
        assert_eq!(info.month.display, "电力之月 | 第4天");
        assert!(info.special_date.is_none());
        assert_eq!(info.daily_guidance, DAILY_GUIDANCE);
    }

    #[test]
    fn suggestions_follow_strides() {
        let s = suggestions(&tables(), d("2025-09-23"), 183);
        assert_eq!(
            s.suggestions,
            [
                "学习一个新概念并尝试讲给别人听",
                "记录三件值得感恩的小事",
                "花十分钟静坐冥想，聆听内在的声音",
                "完成一件拖延已久的小任务",
            ]
        );
        assert_eq!(
            s.avoidances,
            [
                "避免过度承诺超出能力的事情",
                "避免与自己做不必要的比较",
                "避免在社交媒体上消耗过多时间",
            ]
        );
    }

    #[test]
    fn short_tables_are_padded() {
        let mut config = tables();
        config.suggestions = vec!["只有一条".to_owned()];
        config.avoidances = vec![];
        let s = suggestions(&config, d("2025-09-23"), 183);
        assert_eq!(s.suggestions, ["只有一条", SUGGESTION_PAD, SUGGESTION_PAD, SUGGESTION_PAD]);
        assert_eq!(s.avoidances, [AVOIDANCE_PAD; 3]);
    }

    #[test]
    fn lucky_items_and_inspiration() {
        let config = tables();
        let date = d("2025-09-23");
        let lucky = lucky_items(&config, date, 183);
        assert_eq!(lucky.color, "翡翠绿");
        assert_eq!(lucky.number, "6");
        assert_eq!(lucky.food, "菠菜");
        let inspiration = daily_inspiration(&config, date, 183);
        assert_eq!(inspiration.message, "每一次真诚的连接都会在未来开花结果。");
        assert_eq!(inspiration.quote, "路漫漫其修远兮，吾将上下而求索。——屈原");
    }

    #[test]
    fn special_dates() {
        let config = tables();
        let spring = special_date(&config, d("2025-03-20")).unwrap();
        assert_eq!(spring.name, "春分");
        assert_eq!(spring.info, config.key_dates.spring);
        assert_eq!(special_date(&config, d("2031-12-21")).unwrap().name, "冬至");
        assert!(special_date(&config, d("2025-03-21")).is_none());
        assert_eq!(special_date(&config, d("2025-09-22")).unwrap().name, "秋分");
        assert!(special_date(&config, d("2025-09-23")).is_none());
    }

    #[test]
    fn mismatched_seal_table_is_an_error() {
        let mut config = tables();
        config.seals.swap(0, 2);
        let err = maya_day(&config, d("2025-09-23")).unwrap_err();
        assert!(matches!(
            err,
            EngineError::TableMismatch { table: "maya.seals", index: 2, .. }
        ));
    }

    #[test]
    fn birth_reading() {
        let info = birth_info(&tables(), d("1990-01-01")).unwrap();
        assert_eq!(info.kin, 134);
        assert_eq!(info.seal, Seal::WhiteWizard);
        assert_eq!(info.full_name, "自我存在的白巫师");
        assert_eq!(info.life_purpose.summary, "自我存在的白巫师代表了一种独特的生命能量");
        assert_eq!(info.life_purpose.details, "你的生命使命与永恒、接纳、魅力有关");
        assert_eq!(info.life_purpose.action_guide, "通过衡量的方式来实现你的潜能");
        assert_eq!(
            info.personal_traits.strengths,
            [
                "与永恒相关的天赋",
                "在当下临在方面的能力",
                "体现定义的能力",
                "发现和培养自己独特的才能",
                "与接纳相关的天赋",
            ]
        );
        assert_eq!(info.personal_traits.challenges.len(), 3);
        let field = &info.birth_energy_field;
        assert_eq!(field.primary.name, "关系能量场");
        assert_eq!(field.secondary.name, "个人能量场");
        assert_eq!(
            field.balance_suggestion,
            "平衡关系能量场和个人能量场的能量，发挥你的最大潜能"
        );
    }

    #[test]
    fn single_trait_reuses_whole_list() {
        let seal = SealRecord {
            name: "红龙".into(),
            traits: "滋养".into(),
            energy: "原始生命力".into(),
            keyword: "诞生".into(),
        };
        let tone = tables().tones[0].clone();
        let s = strengths(&seal, &tone);
        assert_eq!(s[0], "与滋养相关的天赋");
        assert_eq!(s[4], "与滋养相关的天赋");
    }

    #[test]
    fn energy_fields_always_distinct() {
        let config = tables();
        let start = d("1970-01-01");
        for offset in (0..20_000).step_by(37) {
            let birth = start.add_days(offset).unwrap();
            let info = birth_info(&config, birth).unwrap();
            let field = info.birth_energy_field;
            assert_ne!(field.primary.name, field.secondary.name, "{birth}");
        }
    }

    #[test]
    fn one_energy_field_is_an_error() {
        let config = tables();
        let err = birth_energy_field(&config.energy_fields[..1], d("1990-01-01"), 134).unwrap_err();
        assert_eq!(err, EngineError::EmptyTable("maya.energy_fields"));
    }

    #[test]
    fn range_is_consecutive() {
        let range = DateRange::around(d("2025-12-31"), 3, 3).unwrap();
        let days = maya_range(&tables(), &range).unwrap();
        assert_eq!(days.len(), 7);
        for pair in days.windows(2) {
            assert_eq!(pair[0].date.add_days(1).unwrap(), pair[1].date);
            assert_eq!(pair[0].kin % 260 + 1, pair[1].kin);
        }
    }
}
