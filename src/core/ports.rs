//! Collaborators the engine needs from the outside world.
//!
//! The engine codes against these traits only. `crate::adapters` holds the
//! implementations used by the CLI and by tests.

use crate::errors::AppResult;
use crate::models::ack::AcknowledgementState;
use crate::models::credentials::Credentials;
use crate::models::schedule::UserScheduleConfig;
use crate::models::snapshot::WorkDaySnapshot;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Source of "now". Local wall-clock, same reference as the portal times.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// `Ok(None)` when nothing has been captured yet.
    async fn credentials(&self) -> AppResult<Option<Credentials>>;
}

#[async_trait]
pub trait AttendanceFetcher: Send + Sync {
    /// Fails with `CredentialsExpired` on a 419 from the portal and with
    /// `FetchFailure` on anything else.
    async fn fetch_day(
        &self,
        credentials: &Credentials,
        date: NaiveDate,
        force_refresh: bool,
    ) -> AppResult<WorkDaySnapshot>;
}

/// Hand-entered marcajes that replace the portal when present.
#[async_trait]
pub trait DebugDataSource: Send + Sync {
    async fn debug_data(&self) -> AppResult<Option<String>>;
}

pub trait ScheduleConfigStore: Send + Sync {
    fn load(&self) -> AppResult<UserScheduleConfig>;
    fn save(&self, config: &UserScheduleConfig) -> AppResult<()>;
}

pub trait AcknowledgementStore: Send + Sync {
    fn load(&self, date: NaiveDate) -> AppResult<AcknowledgementState>;
    fn acknowledge(&self, date: NaiveDate, at: NaiveTime) -> AppResult<()>;
    fn clear(&self, date: NaiveDate) -> AppResult<()>;
}
