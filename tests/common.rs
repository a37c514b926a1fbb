#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use cucostatus::models::snapshot::WorkDaySnapshot;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cuco() -> Command {
    cargo_bin_cmd!("cucostatus")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("test time")
}

pub fn snapshot(day: &str, entries: &[&str], exits: &[&str]) -> WorkDaySnapshot {
    WorkDaySnapshot {
        date: date(day),
        entries: entries.iter().map(|s| s.to_string()).collect(),
        exits: exits.iter().map(|s| s.to_string()).collect(),
        raw_detail: String::new(),
    }
}

/// Unique config path inside the system temp dir, with any leftover
/// config/state/detail files removed.
pub fn setup_test_config(name: &str) -> String {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("cucostatus_{name}"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test dir");
    dir.join("cucostatus.conf").to_string_lossy().to_string()
}

pub fn write_config(path: &str, yaml: &str) {
    fs::write(path, yaml).expect("write test config");
}

/// Path of a file living next to the test config.
pub fn sibling(config_path: &str, file: &str) -> String {
    PathBuf::from(config_path)
        .with_file_name(file)
        .to_string_lossy()
        .to_string()
}
