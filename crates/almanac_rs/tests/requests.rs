//! Integration tests for the request-level service.

use std::sync::Arc;

use almanac_rs::{Almanac, AlmanacError, GuideConfig, MayaOutcome};

fn almanac() -> Almanac {
    Almanac::embedded().unwrap()
}

// ---------------------------------------------------------------------------
// Biorhythm
// ---------------------------------------------------------------------------

#[test]
fn birth_day_is_all_zero() {
    let day = almanac().biorhythm("1990-01-01", "1990-01-01").unwrap();
    assert_eq!((day.physical, day.emotional, day.intellectual), (0, 0, 0));
    assert_eq!(day.summary.total_score, 0);
    assert_eq!(day.summary.title, "平稳日");
}

#[test]
fn biorhythm_day_json_shape() {
    let day = almanac().biorhythm("1990-01-01", "2025-09-23").unwrap();
    let json = serde_json::to_value(&day).unwrap();
    assert_eq!(json["date"], "2025-09-23");
    assert_eq!(json["physical"], 81);
    assert_eq!(json["summary"]["level"], "good");
    assert_eq!(json["summary"]["physical_status"], "很好");
}

#[test]
fn biorhythm_rejects_bad_dates() {
    let a = almanac();
    assert!(matches!(
        a.biorhythm("1990-01-01", "2025/13/40"),
        Err(AlmanacError::InvalidDateFormat(_))
    ));
    assert!(matches!(
        a.biorhythm_today("not a date"),
        Err(AlmanacError::InvalidDateFormat(_))
    ));
    assert!(a.biorhythm_range("1990-02-30", 1, 1).is_err());
}

#[test]
fn biorhythm_window_is_parallel() {
    let a = almanac();
    let series = a.biorhythm_range_around("1990-01-01", "2025-09-23", 10, 20).unwrap();
    assert_eq!(series.dates.len(), 31);
    assert_eq!(series.physical.len(), 31);
    assert_eq!(series.dates[10].to_string(), "2025-09-23");
    assert_eq!(series.physical[10], 81);
    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json["dates"][0], "2025-09-13");
}

#[test]
fn today_range_has_requested_width() {
    let series = almanac().biorhythm_range("1990-01-01", 2, 3).unwrap();
    assert_eq!(series.dates.len(), 6);
}

#[test]
fn biorhythm_history_dedups_and_prepends() {
    let a = almanac();
    a.biorhythm("1990-01-01", "2025-09-23").unwrap();
    a.biorhythm("1985-06-15", "2025-09-23").unwrap();
    a.biorhythm_range_around("1990-01-01", "2025-09-23", 1, 1).unwrap();
    assert_eq!(a.biorhythm_history(), ["1990-01-01", "1985-06-15"]);
}

#[test]
fn biorhythm_history_capacity_is_ten() {
    let a = almanac();
    for day in 1..=12 {
        a.biorhythm(&format!("1990-01-{day:02}"), "2025-09-23").unwrap();
    }
    let history = a.biorhythm_history();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0], "1990-01-12");
    assert_eq!(history[9], "1990-01-03");
}

// ---------------------------------------------------------------------------
// Maya
// ---------------------------------------------------------------------------

#[test]
fn maya_reference_day() {
    let outcome = almanac().maya_info("2025-09-23");
    let info = outcome.info().unwrap();
    assert_eq!(info.kin, 183);
    assert_eq!(info.full_name, "磁性的蓝夜");
    assert!(info.special_date.is_none());
}

#[test]
fn maya_bad_date_is_error_object() {
    let outcome = almanac().maya_info("2025/13/40");
    let json = serde_json::to_value(&outcome).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert!(obj["error"].is_string());
}

#[test]
fn maya_range_around_seven_days() {
    let outcome = almanac().maya_range_around("2025-03-17", 3, 3);
    let range = outcome.into_result().unwrap();
    assert_eq!(range.maya_info_list.len(), 7);
    assert_eq!(range.date_range.start().to_string(), "2025-03-14");
    assert_eq!(range.date_range.end().to_string(), "2025-03-20");
    assert!(range.maya_info_list[..6].iter().all(|d| d.special_date.is_none()));
    assert_eq!(range.maya_info_list[6].special_date.as_ref().unwrap().name, "春分");
}

#[test]
fn maya_today_range_has_default_width() {
    let (before, after) = almanac_rs::MAYA_WINDOW;
    let range = almanac().maya_range(before, after).into_result().unwrap();
    assert_eq!(range.maya_info_list.len(), 7);
}

#[test]
fn maya_today_is_a_reading() {
    assert!(!almanac().maya_today().is_error());
}

#[test]
fn birth_info_updates_history() {
    let a = almanac();
    let first = a.maya_birth_info(Some("1990-01-01"));
    assert_eq!(first.info().unwrap().kin, 134);
    a.maya_birth_info(Some("1985-06-15"));
    a.maya_birth_info(Some("1990-01-01"));
    assert_eq!(a.maya_history(), ["1990-01-01", "1985-06-15"]);
}

#[test]
fn birth_info_errors_do_not_touch_history() {
    let a = almanac();
    assert!(a.maya_birth_info(Some("1990-1-1")).is_error());
    match a.maya_birth_info(None) {
        MayaOutcome::Error { error } => assert!(error.contains("birth_date")),
        MayaOutcome::Info(_) => panic!("expected an error"),
    }
    assert!(a.maya_history().is_empty());
}

#[test]
fn maya_history_capacity_is_six() {
    let a = almanac();
    for year in 1980..1990 {
        a.maya_birth_info(Some(&format!("{year}-05-05")));
    }
    let history = a.maya_history();
    assert_eq!(history.len(), 6);
    assert_eq!(history[0], "1989-05-05");
}

// ---------------------------------------------------------------------------
// Dress
// ---------------------------------------------------------------------------

#[test]
fn dress_day_and_errors() {
    let a = almanac();
    let info = a.dress_info("2025-09-23").unwrap();
    assert_eq!(info.daily_element.label(), "木");
    assert!(matches!(
        a.dress_info("2025/13/40"),
        Err(AlmanacError::InvalidDateFormat(_))
    ));
    assert!(a.dress_today().is_ok());
}

#[test]
fn dress_range_json_shape() {
    let range = almanac().dress_range_around("2025-09-23", 1, 6).unwrap();
    let json = serde_json::to_value(&range).unwrap();
    assert_eq!(json["date_range"]["start"], "2025-09-22");
    assert_eq!(json["date_range"]["end"], "2025-09-29");
    assert_eq!(json["dress_info_list"].as_array().unwrap().len(), 8);
}

#[test]
fn dress_today_range() {
    let (before, after) = almanac_rs::DRESS_WINDOW;
    let range = almanac().dress_range(before, after).unwrap();
    assert_eq!(range.dress_info_list.len(), 8);
}

// ---------------------------------------------------------------------------
// Sharing
// ---------------------------------------------------------------------------

#[test]
fn service_is_shareable_across_threads() {
    let a = Arc::new(almanac());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let a = Arc::clone(&a);
            std::thread::spawn(move || {
                a.biorhythm(&format!("199{i}-01-01"), "2025-09-23").unwrap();
                a.maya_birth_info(Some(&format!("199{i}-01-01")));
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(a.biorhythm_history().len(), 4);
    assert_eq!(a.maya_history().len(), 4);
}

#[test]
fn shared_config_serves_two_services() {
    let config = Arc::new(GuideConfig::embedded().unwrap());
    let a = Almanac::new(Arc::clone(&config)).unwrap();
    let b = Almanac::new(config).unwrap();
    a.biorhythm("1990-01-01", "2025-09-23").unwrap();
    assert_eq!(a.biorhythm_history().len(), 1);
    assert!(b.biorhythm_history().is_empty());
}
