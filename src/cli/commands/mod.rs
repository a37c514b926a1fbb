//! One handler per subcommand, plus the wiring they share.

pub mod ack;
pub mod config;
pub mod exit;
pub mod init;
pub mod parse;
pub mod sets;
pub mod status;

use crate::adapters::ack_store::YamlAckStore;
use crate::adapters::attendance::{DetailFileFetcher, InlineDetailFetcher};
use crate::adapters::clock::{FixedClock, SystemClock};
use crate::adapters::config_store::FileConfigStore;
use crate::adapters::debug::{DebugFile, InlineDebugData};
use crate::adapters::memory::StaticCredentials;
use crate::config::Config;
use crate::core::logic::WorkStatusEngine;
use crate::core::ports::{AttendanceFetcher, Clock, CredentialsProvider, DebugDataSource};
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_optional_time;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What every handler gets from `dispatch`.
pub struct Context<'a> {
    pub cfg: &'a Config,
    pub config_path: &'a Path,
    pub test: bool,
}

/// Where today's marcajes come from.
pub enum Source {
    /// The detail file configured for the browser side.
    Portal,
    Detail(String),
    DetailFile(PathBuf),
    Debug(String),
    DebugFile(PathBuf),
}

impl Source {
    pub fn from_args(
        detail: &Option<String>,
        detail_file: &Option<String>,
        debug: &Option<String>,
        debug_file: &Option<String>,
    ) -> Self {
        if let Some(raw) = detail {
            Source::Detail(raw.clone())
        } else if let Some(p) = detail_file {
            Source::DetailFile(expand_tilde(p))
        } else if let Some(raw) = debug {
            Source::Debug(raw.clone())
        } else if let Some(p) = debug_file {
            Source::DebugFile(expand_tilde(p))
        } else {
            Source::Portal
        }
    }
}

pub fn parse_date_arg(date: &Option<String>) -> AppResult<Option<NaiveDate>> {
    match date {
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(None),
    }
}

/// System clock, unless `--date` or `--now` pins it.
pub fn clock_from(date: &Option<String>, now: &Option<String>) -> AppResult<Arc<dyn Clock>> {
    let date = parse_date_arg(date)?;
    let time = parse_optional_time(now.as_ref())?;

    if date.is_none() && time.is_none() {
        return Ok(Arc::new(SystemClock));
    }

    let system = SystemClock.now();
    Ok(Arc::new(FixedClock::at(
        date.unwrap_or(system.date()),
        time.unwrap_or(system.time()),
    )))
}

pub fn build_engine(ctx: &Context, clock: Arc<dyn Clock>, source: Source) -> WorkStatusEngine {
    let store = Arc::new(FileConfigStore::new(ctx.config_path));
    let acks = Arc::new(YamlAckStore::new(ctx.cfg.state_path(ctx.config_path)));

    let local: Arc<dyn CredentialsProvider> = Arc::new(StaticCredentials::local());
    let (credentials, fetcher, debug): (
        Arc<dyn CredentialsProvider>,
        Arc<dyn AttendanceFetcher>,
        Arc<dyn DebugDataSource>,
    ) = match source {
        Source::Portal => (
            store.clone(),
            Arc::new(DetailFileFetcher {
                path: ctx.cfg.detail_path(ctx.config_path),
            }),
            store.clone(),
        ),
        Source::Detail(raw) => (local, Arc::new(InlineDetailFetcher { raw }), no_debug()),
        Source::DetailFile(path) => (local, Arc::new(DetailFileFetcher { path }), no_debug()),
        Source::Debug(raw) => (local, no_fetch(), Arc::new(InlineDebugData(raw))),
        Source::DebugFile(path) => (local, no_fetch(), Arc::new(DebugFile { path })),
    };

    WorkStatusEngine::new(clock, credentials, fetcher, store)
        .with_acknowledgements(acks)
        .with_debug_source(debug)
}

fn no_debug() -> Arc<dyn DebugDataSource> {
    Arc::new(NoDebugData)
}

fn no_fetch() -> Arc<dyn AttendanceFetcher> {
    Arc::new(InlineDetailFetcher { raw: String::new() })
}

/// Explicit portal sources ignore the debug data stored in the config.
struct NoDebugData;

#[async_trait::async_trait]
impl DebugDataSource for NoDebugData {
    async fn debug_data(&self) -> AppResult<Option<String>> {
        Ok(None)
    }
}

/// The engine is async at the fetch boundary; the CLI is not.
pub fn block_on<F: std::future::Future>(fut: F) -> AppResult<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(fut))
}
