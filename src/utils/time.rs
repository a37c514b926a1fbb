//! Time utilities: parsing HH:MM, minutes since midnight, formatting, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Accepts both `HH:MM` and `HH:MM:SS`.
pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// "HH:MM" → minutes since local midnight.
pub fn parse_time_to_minutes(t: &str) -> AppResult<i64> {
    parse_time(t)
        .map(minutes_of)
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn minutes_of(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

pub fn seconds_of(t: NaiveTime) -> i64 {
    t.num_seconds_from_midnight() as i64
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Minutes since midnight → clock time, wrapping past midnight.
/// Negative inputs keep their sign (`-30` → `-00:30`).
pub fn format_time(mins: i64) -> String {
    format_minutes(mins % MINUTES_PER_DAY)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_clock(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
