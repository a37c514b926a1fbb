use crate::config::Config;
use crate::core::ports::{CredentialsProvider, DebugDataSource, ScheduleConfigStore};
use crate::errors::AppResult;
use crate::models::credentials::Credentials;
use crate::models::schedule::UserScheduleConfig;
use async_trait::async_trait;
use std::path::PathBuf;

/// The YAML config file seen through the engine ports. Re-read on every
/// call so that edits made by other processes are picked up.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    pub path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn config(&self) -> AppResult<Config> {
        Config::load_from(&self.path)
    }
}

impl ScheduleConfigStore for FileConfigStore {
    fn load(&self) -> AppResult<UserScheduleConfig> {
        Ok(self.config()?.schedule_config())
    }

    fn save(&self, config: &UserScheduleConfig) -> AppResult<()> {
        let mut cfg = self.config()?;
        cfg.apply_schedule_config(config);
        cfg.save_to(&self.path)
    }
}

#[async_trait]
impl CredentialsProvider for FileConfigStore {
    async fn credentials(&self) -> AppResult<Option<Credentials>> {
        Ok(self.config()?.credentials)
    }
}

#[async_trait]
impl DebugDataSource for FileConfigStore {
    async fn debug_data(&self) -> AppResult<Option<String>> {
        Ok(self.config()?.debug_data)
    }
}
