//! Built-in working-hours sets and the rules that pick one for a date.

use crate::errors::{AppError, AppResult};
use crate::models::schedule::{DaySchedule, ScheduleSetInfo, UserScheduleConfig, WorkingHoursSet};
use crate::utils::date::{is_august, weekday_name};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashMap;
use tracing::debug;

pub const COMMON: &str = "common";
pub const STANDARD: &str = "standard";
pub const INTENSIVE: &str = "intensive";

const WORKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

fn build_set(id: &str, name: &str, day_for: impl Fn(Weekday) -> DaySchedule) -> WorkingHoursSet {
    let schedule: HashMap<Weekday, DaySchedule> =
        WORKDAYS.iter().map(|w| (*w, day_for(*w))).collect();

    WorkingHoursSet {
        id: id.to_string(),
        name: name.to_string(),
        schedule,
    }
}

/// The three sets that ship with the engine, in display order.
///
/// - common: 8h + 1h lunch Monday to Thursday, 6h straight on Friday
/// - standard: 8h + 30m lunch every workday
/// - intensive: 7h straight every workday (summer)
pub fn builtin_sets() -> Vec<WorkingHoursSet> {
    vec![
        build_set(COMMON, "Common schedule", |w| match w {
            Weekday::Fri => DaySchedule::new(360, 0),
            _ => DaySchedule::new(480, 60),
        }),
        build_set(STANDARD, "Standard schedule", |_| DaySchedule::new(480, 30)),
        build_set(INTENSIVE, "Intensive schedule", |_| DaySchedule::new(420, 0)),
    ]
}

pub fn find_set(id: &str) -> AppResult<WorkingHoursSet> {
    builtin_sets()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::UnknownScheduleSet(id.to_string()))
}

/// Id of the set that applies on `date`. August forces `intensive` when
/// auto-detection is on, whatever the stored selection says.
pub fn effective_set_id(config: &UserScheduleConfig, date: NaiveDate) -> &str {
    if config.auto_detect_intensive_august && is_august(date) {
        INTENSIVE
    } else {
        &config.active_set_id
    }
}

pub fn resolve_schedule(config: &UserScheduleConfig, date: NaiveDate) -> AppResult<WorkingHoursSet> {
    let id = effective_set_id(config, date);
    debug!(date = %date, stored = %config.active_set_id, resolved = %id, "resolved working hours set");
    find_set(id)
}

/// Requirement of `set` on `date`. Weekdays the set does not define
/// (weekends) fail with `UnknownWeekday`; callers treat that as "not a workday".
pub fn day_requirement(set: &WorkingHoursSet, date: NaiveDate) -> AppResult<DaySchedule> {
    let weekday = date.weekday();
    set.day(weekday).copied().ok_or_else(|| {
        AppError::UnknownWeekday(format!("{} ({}) in set '{}'", date, weekday_name(weekday), set.id))
    })
}

pub fn available_sets(config: &UserScheduleConfig, date: NaiveDate) -> Vec<ScheduleSetInfo> {
    let current = effective_set_id(config, date).to_string();
    builtin_sets()
        .into_iter()
        .map(|s| ScheduleSetInfo {
            is_current: s.id == current,
            id: s.id,
            name: s.name,
        })
        .collect()
}
