use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minutes a single weekday asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub work_minutes: i64,
    pub eating_minutes: i64,
    pub total_presence_minutes: i64,
}

impl DaySchedule {
    pub const fn new(work_minutes: i64, eating_minutes: i64) -> Self {
        Self {
            work_minutes,
            eating_minutes,
            total_presence_minutes: work_minutes + eating_minutes,
        }
    }
}

/// A named working-hours set. Weekdays without an entry are not workdays.
#[derive(Debug, Clone)]
pub struct WorkingHoursSet {
    pub id: String,
    pub name: String,
    pub schedule: HashMap<Weekday, DaySchedule>,
}

impl WorkingHoursSet {
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.schedule.get(&weekday)
    }
}

/// Entry of `getAvailableWorkingHoursSets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSetInfo {
    pub id: String,
    pub name: String,
    pub is_current: bool,
}

/// User selection, persisted by the config store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScheduleConfig {
    pub active_set_id: String,
    pub auto_detect_intensive_august: bool,
}

impl Default for UserScheduleConfig {
    fn default() -> Self {
        Self {
            active_set_id: "common".to_string(),
            auto_detect_intensive_august: true,
        }
    }
}
