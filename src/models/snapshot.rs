use chrono::NaiveDate;
use serde::Serialize;

/// Output of the timestamp parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDetail {
    pub entries: Vec<String>,
    pub exits: Vec<String>,
}

impl ParsedDetail {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.exits.is_empty()
    }
}

/// One day of attendance as fetched from the portal.
///
/// `entries` and `exits` are "HH:MM" strings in chronological order. An
/// open day carries one more entry than exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDaySnapshot {
    pub date: NaiveDate,
    pub entries: Vec<String>,
    pub exits: Vec<String>,
    pub raw_detail: String,
}

impl WorkDaySnapshot {
    pub fn new(date: NaiveDate, parsed: ParsedDetail, raw_detail: impl Into<String>) -> Self {
        Self {
            date,
            entries: parsed.entries,
            exits: parsed.exits,
            raw_detail: raw_detail.into(),
        }
    }

    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, ParsedDetail::default(), "")
    }

    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Badged in and not yet out.
    pub fn is_in_office(&self) -> bool {
        self.entries.len() > self.exits.len()
    }

    /// Every entry has its exit.
    pub fn is_closed(&self) -> bool {
        !self.entries.is_empty() && self.entries.len() == self.exits.len()
    }

    pub fn first_entry(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn last_exit(&self) -> Option<&str> {
        self.exits.last().map(String::as_str)
    }
}
