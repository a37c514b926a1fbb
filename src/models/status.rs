use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    NotWorking,
    Working,
    OutOfOffice,
    CanLeave,
    TimeToLeave,
    WorkShiftEnded,
    CredentialsExpired,
    Error,
}

impl StatusCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::NotWorking => "NOT_WORKING",
            StatusCode::Working => "WORKING",
            StatusCode::OutOfOffice => "OUT_OF_OFFICE",
            StatusCode::CanLeave => "CAN_LEAVE",
            StatusCode::TimeToLeave => "TIME_TO_LEAVE",
            StatusCode::WorkShiftEnded => "WORK_SHIFT_ENDED",
            StatusCode::CredentialsExpired => "CREDENTIALS_EXPIRED",
            StatusCode::Error => "ERROR",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTag {
    Gray,
    Green,
    Yellow,
    WhiteBlinking,
    Blue,
    Red,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Gray => "gray",
            ColorTag::Green => "green",
            ColorTag::Yellow => "yellow",
            ColorTag::WhiteBlinking => "white-blinking",
            ColorTag::Blue => "blue",
            ColorTag::Red => "red",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the status classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub status: StatusCode,
    pub color: ColorTag,
    pub message: String,
}

impl Classification {
    pub fn new(status: StatusCode, color: ColorTag, message: impl Into<String>) -> Self {
        Self {
            status,
            color,
            message: message.into(),
        }
    }
}

pub const NO_EXIT: &str = "N/A";

/// What the UI layers render. Always a fresh value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkStatus {
    pub status: StatusCode,
    pub color: ColorTag,
    pub message: String,
    pub working_minutes: i64,
    pub working_seconds: i64,
    pub presence_minutes: i64,
    pub remaining_minutes: i64,
    pub theoretical_exit: String,
    pub progress: i64,
}

impl WorkStatus {
    /// A status with no time accounting behind it (errors, empty days).
    pub fn bare(classification: Classification) -> Self {
        Self {
            status: classification.status,
            color: classification.color,
            message: classification.message,
            working_minutes: 0,
            working_seconds: 0,
            presence_minutes: 0,
            remaining_minutes: 0,
            theoretical_exit: NO_EXIT.to_string(),
            progress: 0,
        }
    }
}
