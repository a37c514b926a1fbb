use cucostatus::core::schedule::{
    available_sets, builtin_sets, day_requirement, find_set, resolve_schedule,
};
use cucostatus::errors::AppError;
use cucostatus::models::schedule::UserScheduleConfig;

mod common;
use common::date;

fn config(id: &str, auto: bool) -> UserScheduleConfig {
    UserScheduleConfig {
        active_set_id: id.to_string(),
        auto_detect_intensive_august: auto,
    }
}

#[test]
fn test_three_builtin_sets() {
    let ids: Vec<String> = builtin_sets().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["common", "standard", "intensive"]);
}

#[test]
fn test_presence_is_work_plus_eating() {
    for set in builtin_sets() {
        for day in set.schedule.values() {
            assert_eq!(day.total_presence_minutes, day.work_minutes + day.eating_minutes);
        }
    }
}

#[test]
fn test_common_weekday_requirements() {
    let set = find_set("common").unwrap();
    assert_eq!(day_requirement(&set, date("2026-10-12")).unwrap().total_presence_minutes, 540);
    assert_eq!(day_requirement(&set, date("2026-10-16")).unwrap().total_presence_minutes, 360);
}

#[test]
fn test_weekend_is_not_a_workday() {
    let set = find_set("standard").unwrap();
    for d in ["2026-10-17", "2026-10-18"] {
        assert!(matches!(
            day_requirement(&set, date(d)),
            Err(AppError::UnknownWeekday(_))
        ));
    }
}

#[test]
fn test_august_forces_intensive() {
    let set = resolve_schedule(&config("common", true), date("2025-08-15")).unwrap();
    assert_eq!(set.id, "intensive");
    assert_eq!(day_requirement(&set, date("2025-08-15")).unwrap().total_presence_minutes, 420);
}

#[test]
fn test_august_keeps_selection_when_auto_detect_is_off() {
    let set = resolve_schedule(&config("common", false), date("2025-08-15")).unwrap();
    assert_eq!(set.id, "common");
}

#[test]
fn test_outside_august_uses_selection() {
    let set = resolve_schedule(&config("standard", true), date("2026-10-12")).unwrap();
    assert_eq!(set.id, "standard");
}

#[test]
fn test_unknown_set() {
    assert!(matches!(
        resolve_schedule(&config("nope", false), date("2026-10-12")),
        Err(AppError::UnknownScheduleSet(_))
    ));
}

#[test]
fn test_available_sets_marks_current() {
    let sets = available_sets(&config("standard", true), date("2026-10-12"));
    let current: Vec<&str> = sets.iter().filter(|s| s.is_current).map(|s| s.id.as_str()).collect();
    assert_eq!(current, vec!["standard"]);

    let august = available_sets(&config("standard", true), date("2026-08-03"));
    assert!(august.iter().any(|s| s.id == "intensive" && s.is_current));
}
