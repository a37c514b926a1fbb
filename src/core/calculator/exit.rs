use crate::core::schedule::day_requirement;
use crate::errors::AppResult;
use crate::models::schedule::WorkingHoursSet;
use crate::utils::time::{format_time, parse_time_to_minutes, seconds_of};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitEstimate {
    pub exit_time: String,
    pub remaining_minutes: i64,
    /// Unwrapped minutes since midnight; may exceed 1440.
    pub exit_minutes: i64,
    pub required_minutes: i64,
    pub set_id: String,
}

/// Theoretical exit = first entry + the day's required presence.
///
/// Fails with `UnknownWeekday` when `date` is not a workday for `set`.
pub fn calculate_exit(
    first_entry: &str,
    set: &WorkingHoursSet,
    date: NaiveDate,
    now: NaiveTime,
) -> AppResult<ExitEstimate> {
    let required = day_requirement(set, date)?.total_presence_minutes;
    let exit_minutes = parse_time_to_minutes(first_entry)? + required;

    Ok(ExitEstimate {
        exit_time: format_time(exit_minutes),
        remaining_minutes: remaining_until(exit_minutes, now),
        exit_minutes,
        required_minutes: required,
        set_id: set.id.clone(),
    })
}

/// Whole minutes left until `exit_minutes`, never negative.
pub fn remaining_until(exit_minutes: i64, now: NaiveTime) -> i64 {
    (exit_minutes - seconds_of(now) / 60).max(0)
}
