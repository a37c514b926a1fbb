use cucostatus::core::calculator::classifier::{classify, classify_failure, progress};
use cucostatus::errors::AppError;
use cucostatus::models::ack::AcknowledgementState;
use cucostatus::models::status::{ColorTag, StatusCode};

mod common;
use common::{date, snapshot, time};

const DAY: &str = "2026-10-12";

#[test]
fn test_no_entries_is_not_working() {
    let c = classify(&snapshot(DAY, &[], &[]), 0, 0, 0, None);
    assert_eq!(c.status, StatusCode::NotWorking);
    assert_eq!(c.color, ColorTag::Gray);
}

#[test]
fn test_out_and_done_can_leave() {
    let c = classify(&snapshot(DAY, &["09:00"], &["18:30"]), 570, 570, 0, None);
    assert_eq!(c.status, StatusCode::CanLeave);
    assert_eq!(c.color, ColorTag::Green);
}

#[test]
fn test_out_with_time_left() {
    let c = classify(&snapshot(DAY, &["09:00"], &["14:00"]), 300, 300, 240, None);
    assert_eq!(c.status, StatusCode::OutOfOffice);
    assert_eq!(c.color, ColorTag::Yellow);
}

#[test]
fn test_in_and_done_time_to_leave() {
    let c = classify(&snapshot(DAY, &["09:00"], &[]), 545, 545, 0, None);
    assert_eq!(c.status, StatusCode::TimeToLeave);
    assert_eq!(c.color, ColorTag::WhiteBlinking);
}

#[test]
fn test_last_five_minutes_round_down_to_can_leave() {
    for remaining in 1..=5 {
        let c = classify(&snapshot(DAY, &["09:00"], &[]), 530, 530, remaining, None);
        assert_eq!(c.status, StatusCode::CanLeave, "remaining={remaining}");
        assert_eq!(c.color, ColorTag::Green);
    }
}

#[test]
fn test_in_with_time_left_is_working() {
    let c = classify(&snapshot(DAY, &["09:00"], &[]), 300, 300, 6, None);
    assert_eq!(c.status, StatusCode::Working);
    assert_eq!(c.color, ColorTag::Blue);
}

#[test]
fn test_acknowledged_time_to_leave_becomes_shift_ended() {
    let snap = snapshot(DAY, &["09:00"], &[]);
    let ack = AcknowledgementState::acknowledged(date(DAY), time("18:02"));
    let c = classify(&snap, 545, 545, 0, Some(&ack));
    assert_eq!(c.status, StatusCode::WorkShiftEnded);
}

#[test]
fn test_acknowledgement_from_another_day_is_ignored() {
    let snap = snapshot(DAY, &["09:00"], &[]);
    let ack = AcknowledgementState::acknowledged(date("2026-10-09"), time("18:02"));
    let c = classify(&snap, 545, 545, 0, Some(&ack));
    assert_eq!(c.status, StatusCode::TimeToLeave);
}

#[test]
fn test_classify_is_idempotent() {
    let snap = snapshot(DAY, &["09:00", "15:00"], &["14:00"]);
    let a = classify(&snap, 400, 460, 120, None);
    let b = classify(&snap, 400, 460, 120, None);
    assert_eq!(a, b);
}

#[test]
fn test_failure_statuses() {
    let expired = classify_failure(&AppError::CredentialsExpired);
    assert_eq!(expired.status, StatusCode::CredentialsExpired);
    assert_eq!(expired.color, ColorTag::Red);

    let other = classify_failure(&AppError::FetchFailure("timeout".into()));
    assert_eq!(other.status, StatusCode::Error);
    assert_eq!(other.color, ColorTag::Red);
    assert!(other.message.contains("timeout"));

    assert_eq!(classify_failure(&AppError::NoCredentials).status, StatusCode::Error);
}

#[test]
fn test_progress_shows_overtime() {
    assert_eq!(progress(270, 540), 50);
    assert_eq!(progress(600, 540), 111);
    assert_eq!(progress(100, 0), 0);
}
