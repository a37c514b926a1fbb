use crate::core::parser::snapshot_from_detail;
use crate::core::ports::{AttendanceFetcher, Clock};
use crate::errors::{AppError, AppResult};
use crate::models::credentials::Credentials;
use crate::models::snapshot::WorkDaySnapshot;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Serves a detail string that was captured elsewhere (CLI `--detail`).
#[derive(Debug, Clone)]
pub struct InlineDetailFetcher {
    pub raw: String,
}

#[async_trait]
impl AttendanceFetcher for InlineDetailFetcher {
    async fn fetch_day(
        &self,
        _credentials: &Credentials,
        date: NaiveDate,
        _force_refresh: bool,
    ) -> AppResult<WorkDaySnapshot> {
        Ok(snapshot_from_detail(date, &self.raw))
    }
}

/// Reads the detail column saved to a file by the browser side.
#[derive(Debug, Clone)]
pub struct DetailFileFetcher {
    pub path: PathBuf,
}

#[async_trait]
impl AttendanceFetcher for DetailFileFetcher {
    async fn fetch_day(
        &self,
        _credentials: &Credentials,
        date: NaiveDate,
        _force_refresh: bool,
    ) -> AppResult<WorkDaySnapshot> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::FetchFailure(format!("{}: {e}", self.path.display())))?;
        Ok(snapshot_from_detail(date, raw.trim()))
    }
}

struct CachedDay {
    date: NaiveDate,
    fetched_at: NaiveDateTime,
    snapshot: WorkDaySnapshot,
}

/// Keeps the last snapshot of the day for `ttl`. `force_refresh` and a
/// change of day both go back to the inner fetcher. Failures are never
/// cached.
pub struct CachingFetcher<F> {
    inner: F,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    cached: Mutex<Option<CachedDay>>,
}

impl<F: AttendanceFetcher> CachingFetcher<F> {
    pub fn new(inner: F, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            inner,
            clock,
            ttl,
            cached: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<F: AttendanceFetcher> AttendanceFetcher for CachingFetcher<F> {
    async fn fetch_day(
        &self,
        credentials: &Credentials,
        date: NaiveDate,
        force_refresh: bool,
    ) -> AppResult<WorkDaySnapshot> {
        let now = self.clock.now();
        let mut cached = self.cached.lock().await;

        if !force_refresh
            && let Some(day) = cached.as_ref()
            && day.date == date
            && now - day.fetched_at < self.ttl
        {
            debug!(%date, "serving cached attendance snapshot");
            return Ok(day.snapshot.clone());
        }

        let snapshot = self.inner.fetch_day(credentials, date, force_refresh).await?;
        *cached = Some(CachedDay {
            date,
            fetched_at: now,
            snapshot: snapshot.clone(),
        });
        Ok(snapshot)
    }
}
