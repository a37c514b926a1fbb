//! Unified application error type.
//! All modules (core, adapters, cli, utils) return AppError so that the
//! orchestrator can fold every failure into a displayable status.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("No valid timestamps found in input")]
    NoValidTimestamps,

    // ---------------------------
    // Schedule errors
    // ---------------------------
    #[error("No working hours defined for {0}")]
    UnknownWeekday(String),

    #[error("Unknown working hours set: {0}")]
    UnknownScheduleSet(String),

    // ---------------------------
    // Portal / collaborators
    // ---------------------------
    #[error("Portal credentials expired, log in again")]
    CredentialsExpired,

    #[error("Failed to fetch attendance data: {0}")]
    FetchFailure(String),

    #[error("No portal credentials available")]
    NoCredentials,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True when the upstream service asked for a new login (HTTP 419).
    pub fn is_expiry(&self) -> bool {
        matches!(self, AppError::CredentialsExpired)
    }
}

pub type AppResult<T> = Result<T, AppError>;
