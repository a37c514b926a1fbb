use crate::core::ports::AcknowledgementStore;
use crate::errors::AppResult;
use crate::models::ack::AcknowledgementState;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    time_to_leave_acknowledged: BTreeMap<NaiveDate, NaiveTime>,
}

/// Acknowledgements kept in a small YAML file, one line per day.
#[derive(Debug, Clone)]
pub struct YamlAckStore {
    pub path: PathBuf,
}

impl YamlAckStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> AppResult<StateFile> {
        if !self.path.exists() {
            return Ok(StateFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StateFile::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    fn write(&self, state: &StateFile) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_yaml::to_string(state)?)?;
        Ok(())
    }
}

impl AcknowledgementStore for YamlAckStore {
    fn load(&self, date: NaiveDate) -> AppResult<AcknowledgementState> {
        let state = self.read()?;
        Ok(AcknowledgementState {
            date,
            time_to_leave_acknowledged_at: state.time_to_leave_acknowledged.get(&date).copied(),
        })
    }

    fn acknowledge(&self, date: NaiveDate, at: NaiveTime) -> AppResult<()> {
        let mut state = self.read()?;
        // Only today matters; older days are dropped on write.
        state.time_to_leave_acknowledged.retain(|d, _| *d >= date);
        state.time_to_leave_acknowledged.insert(date, at);
        self.write(&state)
    }

    fn clear(&self, date: NaiveDate) -> AppResult<()> {
        let mut state = self.read()?;
        if state.time_to_leave_acknowledged.remove(&date).is_some() {
            self.write(&state)?;
        }
        Ok(())
    }
}
