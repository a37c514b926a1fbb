use crate::errors::{AppError, AppResult};
use crate::models::credentials::Credentials;
use crate::models::schedule::UserScheduleConfig;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_active_set")]
    pub active_set: String,
    #[serde(default = "default_auto_intensive")]
    pub auto_detect_intensive_august: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where acknowledgements are kept; defaults to `state.yaml` next to
    /// the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<String>,
    /// File where the browser side drops today's portal detail column;
    /// defaults to `detail.txt` next to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_file: Option<String>,
    /// Hand-entered marcajes used instead of the portal while set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}

fn default_active_set() -> String {
    "common".to_string()
}
fn default_auto_intensive() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_set: default_active_set(),
            auto_detect_intensive_august: default_auto_intensive(),
            log_level: default_log_level(),
            state_file: None,
            detail_file: None,
            debug_data: None,
            credentials: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("cucostatus")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".cucostatus")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("cucostatus.conf")
    }

    /// Missing file → defaults. Unreadable or malformed file → error.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Write a default config at `path` unless one is already there.
    /// Returns whether a file was created.
    pub fn init_at(path: &Path, is_test: bool) -> AppResult<bool> {
        if path.exists() || is_test {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    pub fn schedule_config(&self) -> UserScheduleConfig {
        UserScheduleConfig {
            active_set_id: self.active_set.clone(),
            auto_detect_intensive_august: self.auto_detect_intensive_august,
        }
    }

    pub fn apply_schedule_config(&mut self, sc: &UserScheduleConfig) {
        self.active_set = sc.active_set_id.clone();
        self.auto_detect_intensive_august = sc.auto_detect_intensive_august;
    }

    pub fn detail_path(&self, config_path: &Path) -> PathBuf {
        match &self.detail_file {
            Some(p) => expand_tilde(p),
            None => config_path.with_file_name("detail.txt"),
        }
    }

    pub fn state_path(&self, config_path: &Path) -> PathBuf {
        match &self.state_file {
            Some(p) => expand_tilde(p),
            None => config_path.with_file_name("state.yaml"),
        }
    }
}
