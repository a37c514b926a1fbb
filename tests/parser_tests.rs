use cucostatus::core::parser::{parse_debug_input, parse_detail, snapshot_from_debug};
use cucostatus::errors::AppError;

mod common;
use common::date;

#[test]
fn test_detail_strips_seconds_and_keeps_order() {
    let parsed = parse_detail("08:01:12 E 001 | 14:02:59 S 001 | 14:45:00 E 002");
    assert_eq!(parsed.entries, vec!["08:01", "14:45"]);
    assert_eq!(parsed.exits, vec!["14:02"]);
}

#[test]
fn test_detail_empty_input() {
    assert!(parse_detail("").is_empty());
    assert!(parse_detail("   |  | ").is_empty());
}

#[test]
fn test_detail_skips_malformed_tokens() {
    let parsed = parse_detail("09:00:00 E 001|garbage|9:00 E|10:00:00 X 001|11:00:00 S 12|12:00:00 S 003");
    assert_eq!(parsed.entries, vec!["09:00"]);
    assert_eq!(parsed.exits, vec!["12:00"]);
}

#[test]
fn test_detail_does_not_sort() {
    let parsed = parse_detail("15:00:00 E 001 | 09:00:00 E 001");
    assert_eq!(parsed.entries, vec!["15:00", "09:00"]);
}

#[test]
fn test_detail_tolerates_whitespace_around_tokens() {
    let parsed = parse_detail("  09:00:00   E   947  |\t18:00:00 S 947  ");
    assert_eq!(parsed.entries, vec!["09:00"]);
    assert_eq!(parsed.exits, vec!["18:00"]);
}

#[test]
fn test_detail_rejects_out_of_range_times() {
    let parsed = parse_detail("25:00:00 E 001 | 09:61:00 E 001 | 10:00:00 E 001");
    assert_eq!(parsed.entries, vec!["10:00"]);
}

#[test]
fn test_debug_sorts_and_collapses_double_scans() {
    let parsed = parse_debug_input("14:00 S | 08:58 E | 09:02 E | 14:30 E").unwrap();
    assert_eq!(parsed.entries, vec!["09:02", "14:30"]);
    assert_eq!(parsed.exits, vec!["14:00"]);
}

#[test]
fn test_debug_collapses_consecutive_exits_to_latest() {
    let parsed = parse_debug_input("09:00 E, 13:00 S, 13:01 S").unwrap();
    assert_eq!(parsed.exits, vec!["13:01"]);
}

#[test]
fn test_debug_accepts_portal_tokens_and_newlines() {
    let parsed = parse_debug_input("09:00:00 E 001\n14:00:00 S 001\n").unwrap();
    assert_eq!(parsed.entries, vec!["09:00"]);
    assert_eq!(parsed.exits, vec!["14:00"]);
}

#[test]
fn test_debug_json_buckets() {
    let parsed =
        parse_debug_input(r#"{"entries": ["15:00", "09:00"], "exits": ["14:00"]}"#).unwrap();
    assert_eq!(parsed.entries, vec!["09:00", "15:00"]);
    assert_eq!(parsed.exits, vec!["14:00"]);
}

#[test]
fn test_debug_json_objects() {
    let parsed = parse_debug_input(
        r#"[{"time": "09:00", "type": "E"}, {"time": "13:30:10", "kind": "exit"}]"#,
    )
    .unwrap();
    assert_eq!(parsed.entries, vec!["09:00"]);
    assert_eq!(parsed.exits, vec!["13:30"]);
}

#[test]
fn test_debug_json_strings() {
    let parsed = parse_debug_input(r#"["09:00 E", "14:00 S 001"]"#).unwrap();
    assert_eq!(parsed.entries, vec!["09:00"]);
    assert_eq!(parsed.exits, vec!["14:00"]);
}

#[test]
fn test_debug_drops_leading_exit() {
    let parsed = parse_debug_input("07:30 S | 09:00 E").unwrap();
    assert_eq!(parsed.entries, vec!["09:00"]);
    assert!(parsed.exits.is_empty());
}

#[test]
fn test_debug_exits_only_is_an_empty_day() {
    let parsed = parse_debug_input("13:00 S").unwrap();
    assert!(parsed.is_empty());

    let snap = snapshot_from_debug(date("2026-10-12"), "13:00 S | 18:00 S").unwrap();
    assert!(!snap.has_entries());
    assert!(snap.exits.is_empty());
}

#[test]
fn test_debug_no_valid_timestamps() {
    assert!(matches!(
        parse_debug_input("hello world"),
        Err(AppError::NoValidTimestamps)
    ));
    assert!(matches!(
        parse_debug_input("[1, 2, 3]"),
        Err(AppError::NoValidTimestamps)
    ));
}

#[test]
fn test_debug_empty_is_not_an_error() {
    assert!(parse_debug_input("  ").unwrap().is_empty());
}

#[test]
fn test_debug_snapshot_renders_portal_detail() {
    let snap = snapshot_from_debug(date("2026-10-12"), "09:00 E | 14:00 S").unwrap();
    assert_eq!(snap.raw_detail, "09:00:00 E 000 | 14:00:00 S 000");
    assert!(snap.is_closed());
}
