use crate::core::ports::DebugDataSource;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::path::PathBuf;

/// Debug marcajes given directly (CLI `--debug`).
#[derive(Debug, Clone)]
pub struct InlineDebugData(pub String);

#[async_trait]
impl DebugDataSource for InlineDebugData {
    async fn debug_data(&self) -> AppResult<Option<String>> {
        Ok(Some(self.0.clone()))
    }
}

/// Debug marcajes read from a text or JSON file.
#[derive(Debug, Clone)]
pub struct DebugFile {
    pub path: PathBuf,
}

#[async_trait]
impl DebugDataSource for DebugFile {
    async fn debug_data(&self) -> AppResult<Option<String>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::Other(format!("cannot read {}: {e}", self.path.display())))?;
        Ok(Some(content))
    }
}
