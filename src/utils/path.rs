//! Path utilities: resolve the config path, expand ~.

use crate::config::Config;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `--config` override, or the platform default.
pub fn resolve_config_path(custom: Option<&str>) -> PathBuf {
    match custom {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    }
}
