use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{cuco, setup_test_config, sibling, write_config};

#[test]
fn test_status_json_from_inline_detail() {
    let cfg = setup_test_config("status_json");

    cuco()
        .args([
            "--config",
            &cfg,
            "status",
            "--detail",
            "09:00:00 E 001",
            "--date",
            "2026-10-12",
            "--now",
            "14:00",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains(r#""status": "WORKING""#))
        .stdout(contains(r#""color": "blue""#))
        .stdout(contains(r#""workingMinutes": 300"#))
        .stdout(contains(r#""theoreticalExit": "18:00""#))
        .stdout(contains(r#""remainingMinutes": 240"#));
}

#[test]
fn test_status_reads_detail_file_from_config_dir() {
    let cfg = setup_test_config("status_detail_file");
    write_config(&cfg, "credentials:\n  token: abc123\n  cookies: XSRF-TOKEN=1\n");
    fs::write(sibling(&cfg, "detail.txt"), "09:00:00 E 001 | 18:30:00 S 001\n").unwrap();

    cuco()
        .args([
            "--config", &cfg, "status", "--date", "2026-10-12", "--now", "19:00", "--json",
        ])
        .assert()
        .success()
        .stdout(contains(r#""status": "CAN_LEAVE""#))
        .stdout(contains(r#""presenceMinutes": 570"#));
}

#[test]
fn test_status_without_source_data_is_an_error_status() {
    let cfg = setup_test_config("status_missing_file");

    // No credentials in config → error status, still exit code 0
    cuco()
        .args(["--config", &cfg, "status", "--date", "2026-10-12", "--now", "10:00", "--json"])
        .assert()
        .success()
        .stdout(contains(r#""status": "ERROR""#))
        .stdout(contains(r#""color": "red""#));
}

#[test]
fn test_status_uses_configured_set() {
    let cfg = setup_test_config("status_configured_set");
    write_config(&cfg, "active_set: standard\nauto_detect_intensive_august: true\n");

    cuco()
        .args([
            "--config",
            &cfg,
            "status",
            "--detail",
            "09:00:00 E 001",
            "--date",
            "2026-10-12",
            "--now",
            "12:00",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains(r#""theoreticalExit": "17:30""#));
}

#[test]
fn test_status_debug_data() {
    let cfg = setup_test_config("status_debug");

    cuco()
        .args([
            "--config",
            &cfg,
            "status",
            "--debug",
            r#"{"entries": ["09:00"], "exits": ["13:00"]}"#,
            "--date",
            "2026-10-12",
            "--now",
            "13:30",
        ])
        .assert()
        .success()
        .stdout(contains("OUT_OF_OFFICE"));
}

#[test]
fn test_status_debug_data_from_config() {
    let cfg = setup_test_config("status_debug_config");
    write_config(&cfg, "debug_data: \"08:00 E | 08:01 E\"\n");

    cuco()
        .args(["--config", &cfg, "status", "--date", "2026-10-12", "--now", "16:59", "--json"])
        .assert()
        .success()
        .stdout(contains(r#""status": "CAN_LEAVE""#))
        .stdout(contains(r#""remainingMinutes": 2"#));
}

#[test]
fn test_exit_what_if() {
    let cfg = setup_test_config("exit_what_if");

    cuco()
        .args([
            "--config", &cfg, "exit", "08:00", "--date", "2026-10-16", "--now", "09:00",
        ])
        .assert()
        .success()
        .stdout(contains("14:00"))
        .stdout(contains("06h 00m"));

    cuco()
        .args([
            "--config", &cfg, "exit", "08:00", "--set", "intensive", "--date", "2026-10-12",
            "--now", "09:00", "--json",
        ])
        .assert()
        .success()
        .stdout(contains(r#""exitTime": "15:00""#));
}

#[test]
fn test_exit_on_weekend_fails() {
    let cfg = setup_test_config("exit_weekend");

    cuco()
        .args(["--config", &cfg, "exit", "08:00", "--date", "2026-10-17"])
        .assert()
        .failure()
        .stderr(contains("No working hours defined"));
}

#[test]
fn test_sets_listing() {
    let cfg = setup_test_config("sets_listing");

    cuco()
        .args(["--config", &cfg, "sets", "--date", "2026-10-12"])
        .assert()
        .success()
        .stdout(contains("* common"))
        .stdout(contains("Fri 06:00"))
        .stdout(contains("Sat --:--"));

    cuco()
        .args(["--config", &cfg, "sets", "--date", "2026-08-10", "--json"])
        .assert()
        .success()
        .stdout(contains(r#""isCurrent": true"#));
}

#[test]
fn test_parse_command() {
    let cfg = setup_test_config("parse_cmd");

    cuco()
        .args([
            "--config",
            &cfg,
            "parse",
            "08:00:00 E 001 | bad | 14:00:00 S 001",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains(r#""08:00""#))
        .stdout(contains(r#""14:00""#))
        .stdout(contains("bad").not());

    cuco()
        .args(["--config", &cfg, "parse", "nonsense", "--debug"])
        .assert()
        .failure()
        .stderr(contains("No valid timestamps"));
}

#[test]
fn test_config_set_active_persists() {
    let cfg = setup_test_config("config_set_active");

    cuco()
        .args(["--config", &cfg, "config", "--set-active", "intensive", "--auto-intensive", "false"])
        .assert()
        .success();

    let content = fs::read_to_string(&cfg).unwrap();
    assert!(content.contains("active_set: intensive"));
    assert!(content.contains("auto_detect_intensive_august: false"));

    cuco()
        .args(["--config", &cfg, "config", "--set-active", "nope"])
        .assert()
        .failure()
        .stderr(contains("Unknown working hours set"));
}

#[test]
fn test_ack_turns_time_to_leave_into_shift_ended() {
    let cfg = setup_test_config("ack_flow");
    let args = [
        "--config",
        cfg.as_str(),
        "status",
        "--detail",
        "09:00:00 E 001",
        "--date",
        "2026-10-12",
        "--now",
        "18:05",
        "--json",
    ];

    cuco()
        .args(args)
        .assert()
        .success()
        .stdout(contains("TIME_TO_LEAVE"));

    cuco()
        .args(["--config", &cfg, "ack", "--date", "2026-10-12", "--now", "18:06"])
        .assert()
        .success();

    cuco()
        .args(args)
        .assert()
        .success()
        .stdout(contains("WORK_SHIFT_ENDED"));

    cuco()
        .args(["--config", &cfg, "ack", "--date", "2026-10-12", "--clear"])
        .assert()
        .success();

    cuco()
        .args(args)
        .assert()
        .success()
        .stdout(contains("TIME_TO_LEAVE"));
}

#[test]
fn test_ack_uses_pinned_clock() {
    let cfg = setup_test_config("ack_pinned_clock");

    cuco()
        .args(["--config", &cfg, "ack", "--date", "2026-10-12", "--now", "18:06"])
        .assert()
        .success()
        .stdout(contains("2026-10-12"));

    let state = fs::read_to_string(sibling(&cfg, "state.yaml")).unwrap();
    assert!(state.contains("2026-10-12"));
    assert!(state.contains("18:06"));
}

#[test]
fn test_config_selection_keeps_other_settings() {
    let cfg = setup_test_config("config_keeps_settings");
    write_config(&cfg, "log_level: debug\ncredentials:\n  token: abc123\n");

    cuco()
        .args(["--config", &cfg, "config", "--set-active", "standard"])
        .assert()
        .success()
        .stdout(contains("Active set: standard"));

    let content = fs::read_to_string(&cfg).unwrap();
    assert!(content.contains("active_set: standard"));
    assert!(content.contains("log_level: debug"));
    assert!(content.contains("token: abc123"));
}

#[test]
fn test_init_creates_config_once() {
    let cfg = setup_test_config("init_once");

    cuco().args(["--config", &cfg, "init"]).assert().success();
    assert!(fs::metadata(&cfg).is_ok());

    cuco()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("left untouched"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let cfg = setup_test_config("init_test_mode");

    cuco().args(["--config", &cfg, "--test", "init"]).assert().success();
    assert!(fs::metadata(&cfg).is_err());
}
