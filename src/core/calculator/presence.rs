//! Presence and working-time accounting.
//!
//! All values are minutes (or seconds) since local midnight. Spans that go
//! backwards because of bad input are clamped to zero.

use crate::models::snapshot::WorkDaySnapshot;
use crate::utils::time::{parse_time_to_minutes, seconds_of};
use chrono::NaiveTime;
use serde::Serialize;

/// One entry→exit stay. `open` when the exit has not happened yet and `end`
/// is "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
    pub open: bool,
}

impl Interval {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).max(0)
    }
}

/// Time outside between a closed exit and the next entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gap {
    pub start: i64,
    pub end: i64,
}

impl Gap {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).max(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayTimeline {
    pub intervals: Vec<Interval>,
    pub gaps: Vec<Gap>,
    pub presence_minutes: i64,
    pub working_minutes: i64,
}

fn minutes(t: &str) -> Option<i64> {
    parse_time_to_minutes(t).ok()
}

fn now_minutes(now: NaiveTime) -> i64 {
    seconds_of(now) / 60
}

/// Where the working span ends: the last exit on a closed day, else now.
fn span_end_seconds(snapshot: &WorkDaySnapshot, now: NaiveTime) -> Option<i64> {
    if snapshot.exits.len() == snapshot.entries.len() {
        snapshot.last_exit().and_then(minutes).map(|m| m * 60)
    } else {
        Some(seconds_of(now))
    }
}

/// Seconds from the first entry to now (or to the last exit on a closed day),
/// breaks included.
pub fn compute_working_seconds(snapshot: &WorkDaySnapshot, now: NaiveTime) -> i64 {
    let Some(first) = snapshot.first_entry().and_then(minutes) else {
        return 0;
    };
    let Some(end) = span_end_seconds(snapshot, now) else {
        return 0;
    };
    (end - first * 60).max(0)
}

pub fn compute_working_minutes(snapshot: &WorkDaySnapshot, now: NaiveTime) -> i64 {
    compute_working_seconds(snapshot, now) / 60
}

/// Pair each entry with the exit at the same index; the trailing entry of an
/// open day runs until now.
pub fn build_intervals(snapshot: &WorkDaySnapshot, now: NaiveTime) -> Vec<Interval> {
    snapshot
        .entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let start = minutes(entry)?;
            match snapshot.exits.get(i) {
                Some(exit) => Some(Interval {
                    start,
                    end: minutes(exit)?,
                    open: false,
                }),
                None => Some(Interval {
                    start,
                    end: now_minutes(now),
                    open: true,
                }),
            }
        })
        .collect()
}

/// Minutes actually spent inside: sum of every stay, gaps excluded.
pub fn compute_presence_minutes(snapshot: &WorkDaySnapshot, now: NaiveTime) -> i64 {
    build_intervals(snapshot, now)
        .iter()
        .map(Interval::duration_minutes)
        .sum()
}

pub fn build_day_timeline(snapshot: &WorkDaySnapshot, now: NaiveTime) -> DayTimeline {
    if !snapshot.has_entries() {
        return DayTimeline::default();
    }

    let intervals = build_intervals(snapshot, now);

    let gaps = intervals
        .windows(2)
        .filter(|w| !w[0].open && w[1].start > w[0].end)
        .map(|w| Gap {
            start: w[0].end,
            end: w[1].start,
        })
        .collect();

    DayTimeline {
        presence_minutes: intervals.iter().map(Interval::duration_minutes).sum(),
        working_minutes: compute_working_minutes(snapshot, now),
        intervals,
        gaps,
    }
}
