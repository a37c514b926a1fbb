//! Work status orchestration: fetch → parse → compute → classify.

use crate::core::calculator::classifier::{classify, classify_failure, not_working, progress};
use crate::core::calculator::exit::{ExitEstimate, calculate_exit};
use crate::core::calculator::presence::{
    compute_presence_minutes, compute_working_minutes, compute_working_seconds,
};
use crate::core::parser::{self, snapshot_from_debug};
use crate::core::ports::{
    AcknowledgementStore, AttendanceFetcher, Clock, CredentialsProvider, DebugDataSource,
    ScheduleConfigStore,
};
use crate::core::schedule::{available_sets, find_set, resolve_schedule};
use crate::errors::{AppError, AppResult};
use crate::models::ack::AcknowledgementState;
use crate::models::schedule::{ScheduleSetInfo, UserScheduleConfig};
use crate::models::snapshot::{ParsedDetail, WorkDaySnapshot};
use crate::models::status::{NO_EXIT, WorkStatus};
use crate::utils::time::{parse_time_to_minutes, seconds_of};
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Stateless between calls: every figure comes from the fetched snapshot and
/// the injected clock. Cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct WorkStatusEngine {
    clock: Arc<dyn Clock>,
    credentials: Arc<dyn CredentialsProvider>,
    fetcher: Arc<dyn AttendanceFetcher>,
    schedule_store: Arc<dyn ScheduleConfigStore>,
    acks: Option<Arc<dyn AcknowledgementStore>>,
    debug_source: Option<Arc<dyn DebugDataSource>>,
}

impl WorkStatusEngine {
    pub fn new(
        clock: Arc<dyn Clock>,
        credentials: Arc<dyn CredentialsProvider>,
        fetcher: Arc<dyn AttendanceFetcher>,
        schedule_store: Arc<dyn ScheduleConfigStore>,
    ) -> Self {
        Self {
            clock,
            credentials,
            fetcher,
            schedule_store,
            acks: None,
            debug_source: None,
        }
    }

    pub fn with_acknowledgements(mut self, acks: Arc<dyn AcknowledgementStore>) -> Self {
        self.acks = Some(acks);
        self
    }

    pub fn with_debug_source(mut self, source: Arc<dyn DebugDataSource>) -> Self {
        self.debug_source = Some(source);
        self
    }

    /// The day the engine's clock is on.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    /// Primary entry point. Never fails: every error becomes a status.
    pub async fn get_work_status(&self, force_refresh: bool) -> WorkStatus {
        let now = self.clock.now();

        match self.load_snapshot(now.date(), force_refresh).await {
            Ok(snapshot) => self.status_for(&snapshot, now.time()),
            Err(e) => {
                warn!(error = %e, "attendance fetch failed");
                WorkStatus::bare(classify_failure(&e))
            }
        }
    }

    async fn load_snapshot(&self, date: NaiveDate, force_refresh: bool) -> AppResult<WorkDaySnapshot> {
        if let Some(source) = &self.debug_source
            && let Some(data) = source.debug_data().await?
            && !data.trim().is_empty()
        {
            info!("using debug marcajes instead of the portal");
            return match snapshot_from_debug(date, &data) {
                Ok(snapshot) => Ok(snapshot),
                Err(AppError::NoValidTimestamps) => {
                    warn!("debug data holds no valid timestamps, treating the day as empty");
                    Ok(WorkDaySnapshot::empty(date))
                }
                Err(e) => Err(e),
            };
        }

        let credentials = self
            .credentials
            .credentials()
            .await?
            .filter(|c| c.is_usable())
            .ok_or(AppError::NoCredentials)?;

        self.fetcher.fetch_day(&credentials, date, force_refresh).await
    }

    fn schedule_config(&self) -> UserScheduleConfig {
        self.schedule_store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not read schedule config, using defaults");
            UserScheduleConfig::default()
        })
    }

    fn acknowledgement(&self, date: NaiveDate) -> Option<AcknowledgementState> {
        let store = self.acks.as_ref()?;
        match store.load(date) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(error = %e, "could not read acknowledgement state");
                None
            }
        }
    }

    /// Evaluate an already fetched snapshot at `now`. Synchronous and free of
    /// I/O apart from reading the schedule and acknowledgement stores.
    pub fn status_for(&self, snapshot: &WorkDaySnapshot, now: NaiveTime) -> WorkStatus {
        if !snapshot.has_entries() {
            return WorkStatus::bare(not_working("No entry recorded today"));
        }

        let working_minutes = compute_working_minutes(snapshot, now);
        let working_seconds = compute_working_seconds(snapshot, now);
        let presence_minutes = compute_presence_minutes(snapshot, now);

        let mut status = WorkStatus {
            working_minutes,
            working_seconds,
            presence_minutes,
            ..WorkStatus::bare(not_working(""))
        };

        let config = self.schedule_config();
        let set = match resolve_schedule(&config, snapshot.date) {
            Ok(set) => set,
            Err(e) => {
                warn!(error = %e, "cannot resolve working hours set");
                let c = classify_failure(&e);
                return WorkStatus {
                    status: c.status,
                    color: c.color,
                    message: c.message,
                    ..status
                };
            }
        };

        let first = snapshot.first_entry().unwrap_or_default();
        let estimate = match calculate_exit(first, &set, snapshot.date, reference_time(snapshot, now)) {
            Ok(estimate) => estimate,
            Err(AppError::UnknownWeekday(day)) => {
                debug!(%day, "not a workday");
                status.message = "Not a workday".to_string();
                status.theoretical_exit = NO_EXIT.to_string();
                return status;
            }
            Err(e) => {
                warn!(error = %e, "cannot compute theoretical exit");
                let c = classify_failure(&e);
                return WorkStatus {
                    status: c.status,
                    color: c.color,
                    message: c.message,
                    ..status
                };
            }
        };

        let ack = self.acknowledgement(snapshot.date);
        let c = classify(
            snapshot,
            presence_minutes,
            working_minutes,
            estimate.remaining_minutes,
            ack.as_ref(),
        );

        debug!(
            status = %c.status,
            working_minutes,
            presence_minutes,
            remaining = estimate.remaining_minutes,
            exit = %estimate.exit_time,
            "classified work day"
        );

        WorkStatus {
            status: c.status,
            color: c.color,
            message: c.message,
            remaining_minutes: estimate.remaining_minutes,
            theoretical_exit: estimate.exit_time,
            progress: progress(working_minutes, estimate.required_minutes),
            ..status
        }
    }

    /// What-if query: exit time for a given entry, optionally on another set
    /// or date.
    pub fn calculate_exit(
        &self,
        entry_time: &str,
        set_id: Option<&str>,
        date: Option<NaiveDate>,
    ) -> AppResult<ExitEstimate> {
        let now = self.clock.now();
        let date = date.unwrap_or(now.date());
        let set = match set_id {
            Some(id) => find_set(id)?,
            None => resolve_schedule(&self.schedule_config(), date)?,
        };
        calculate_exit(entry_time, &set, date, now.time())
    }

    pub fn available_sets(&self) -> Vec<ScheduleSetInfo> {
        available_sets(&self.schedule_config(), self.clock.now().date())
    }

    pub fn parse_detail(&self, raw: &str) -> ParsedDetail {
        parser::parse_detail(raw)
    }

    /// Silence today's time-to-leave alert.
    pub fn acknowledge_time_to_leave(&self) -> AppResult<()> {
        let now = self.clock.now();
        self.ack_store()?.acknowledge(now.date(), now.time())
    }

    /// Re-enable today's time-to-leave alert.
    pub fn clear_time_to_leave(&self) -> AppResult<()> {
        self.ack_store()?.clear(self.clock.now().date())
    }

    fn ack_store(&self) -> AppResult<&Arc<dyn AcknowledgementStore>> {
        self.acks
            .as_ref()
            .ok_or_else(|| AppError::Config("no acknowledgement store configured".to_string()))
    }

    /// Persist a new set selection after checking the id exists.
    pub fn select_schedule(
        &self,
        active_set_id: Option<&str>,
        auto_detect_intensive_august: Option<bool>,
    ) -> AppResult<UserScheduleConfig> {
        let mut config = self.schedule_store.load()?;
        if let Some(id) = active_set_id {
            config.active_set_id = find_set(id)?.id;
        }
        if let Some(flag) = auto_detect_intensive_august {
            config.auto_detect_intensive_august = flag;
        }
        self.schedule_store.save(&config)?;
        info!(set = %config.active_set_id, "schedule selection saved");
        Ok(config)
    }
}

/// A closed day is judged from its last exit, so a finished day never shows
/// minutes left just because "now" predates the exit.
fn reference_time(snapshot: &WorkDaySnapshot, now: NaiveTime) -> NaiveTime {
    if !snapshot.is_closed() {
        return now;
    }
    let last_exit = snapshot
        .last_exit()
        .and_then(|t| parse_time_to_minutes(t).ok())
        .and_then(|m| NaiveTime::from_num_seconds_from_midnight_opt((m * 60) as u32, 0));

    match last_exit {
        Some(exit) if seconds_of(exit) > seconds_of(now) => exit,
        _ => now,
    }
}
