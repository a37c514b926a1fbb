use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Whether the user dismissed today's "time to leave" alert.
///
/// Keyed by date: an acknowledgement from yesterday never silences today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgementState {
    pub date: NaiveDate,
    pub time_to_leave_acknowledged_at: Option<NaiveTime>,
}

impl AcknowledgementState {
    pub fn none(date: NaiveDate) -> Self {
        Self {
            date,
            time_to_leave_acknowledged_at: None,
        }
    }

    pub fn acknowledged(date: NaiveDate, at: NaiveTime) -> Self {
        Self {
            date,
            time_to_leave_acknowledged_at: Some(at),
        }
    }

    pub fn is_acknowledged_on(&self, date: NaiveDate) -> bool {
        self.date == date && self.time_to_leave_acknowledged_at.is_some()
    }
}
