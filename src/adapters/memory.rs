//! In-process stores, for embedding the engine without touching disk.

use crate::core::ports::{AcknowledgementStore, CredentialsProvider, ScheduleConfigStore};
use crate::errors::{AppError, AppResult};
use crate::models::ack::AcknowledgementState;
use crate::models::credentials::Credentials;
use crate::models::schedule::UserScheduleConfig;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use std::sync::RwLock;

fn poisoned() -> AppError {
    AppError::Other("in-memory store lock poisoned".to_string())
}

#[derive(Debug, Default)]
pub struct MemoryScheduleStore {
    config: RwLock<UserScheduleConfig>,
}

impl MemoryScheduleStore {
    pub fn new(config: UserScheduleConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }
}

impl ScheduleConfigStore for MemoryScheduleStore {
    fn load(&self) -> AppResult<UserScheduleConfig> {
        Ok(self.config.read().map_err(|_| poisoned())?.clone())
    }

    fn save(&self, config: &UserScheduleConfig) -> AppResult<()> {
        *self.config.write().map_err(|_| poisoned())? = config.clone();
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryAckStore {
    acks: RwLock<HashMap<NaiveDate, NaiveTime>>,
}

impl AcknowledgementStore for MemoryAckStore {
    fn load(&self, date: NaiveDate) -> AppResult<AcknowledgementState> {
        let acks = self.acks.read().map_err(|_| poisoned())?;
        Ok(AcknowledgementState {
            date,
            time_to_leave_acknowledged_at: acks.get(&date).copied(),
        })
    }

    fn acknowledge(&self, date: NaiveDate, at: NaiveTime) -> AppResult<()> {
        self.acks.write().map_err(|_| poisoned())?.insert(date, at);
        Ok(())
    }

    fn clear(&self, date: NaiveDate) -> AppResult<()> {
        self.acks.write().map_err(|_| poisoned())?.remove(&date);
        Ok(())
    }
}

/// Fixed credentials, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(pub Option<Credentials>);

impl StaticCredentials {
    /// Placeholder for local sources that never talk to the portal.
    pub fn local() -> Self {
        Self(Some(Credentials::new("local", "", "")))
    }
}

#[async_trait]
impl CredentialsProvider for StaticCredentials {
    async fn credentials(&self) -> AppResult<Option<Credentials>> {
        Ok(self.0.clone())
    }
}
