//! Maps the current day figures to a status, a color and a message.
//!
//! Pure: the same inputs always give the same classification.

use crate::errors::AppError;
use crate::models::ack::AcknowledgementState;
use crate::models::snapshot::WorkDaySnapshot;
use crate::models::status::{Classification, ColorTag, StatusCode};
use crate::utils::formatting::mins2readable;

/// Under this many minutes left, an in-office user is told they can go.
pub const CAN_LEAVE_THRESHOLD_MINUTES: i64 = 5;

pub fn classify(
    snapshot: &WorkDaySnapshot,
    presence_minutes: i64,
    working_minutes: i64,
    remaining_minutes: i64,
    ack: Option<&AcknowledgementState>,
) -> Classification {
    if !snapshot.has_entries() {
        return not_working("No entry recorded today");
    }

    let remaining = remaining_minutes.max(0);

    if !snapshot.is_in_office() {
        return if remaining == 0 {
            Classification::new(
                StatusCode::CanLeave,
                ColorTag::Green,
                format!(
                    "Day complete: {} inside, {} since first entry",
                    mins2readable(presence_minutes, false, false),
                    mins2readable(working_minutes, false, false)
                ),
            )
        } else {
            Classification::new(
                StatusCode::OutOfOffice,
                ColorTag::Yellow,
                format!("Out of the office, {} still to go", mins2readable(remaining, false, false)),
            )
        };
    }

    match remaining {
        0 if ack.is_some_and(|a| a.is_acknowledged_on(snapshot.date)) => Classification::new(
            StatusCode::WorkShiftEnded,
            ColorTag::Green,
            "Work shift ended",
        ),
        0 => Classification::new(
            StatusCode::TimeToLeave,
            ColorTag::WhiteBlinking,
            "Time to leave! Required presence reached",
        ),
        r if r <= CAN_LEAVE_THRESHOLD_MINUTES => Classification::new(
            StatusCode::CanLeave,
            ColorTag::Green,
            format!("You can leave now ({r} min left)"),
        ),
        r => Classification::new(
            StatusCode::Working,
            ColorTag::Blue,
            format!("Working, {} left", mins2readable(r, false, false)),
        ),
    }
}

pub fn not_working(message: impl Into<String>) -> Classification {
    Classification::new(StatusCode::NotWorking, ColorTag::Gray, message)
}

/// Failures of the fetch side. Expiry gets its own status so the UI can ask
/// for a new login; everything else is a generic error.
pub fn classify_failure(err: &AppError) -> Classification {
    if err.is_expiry() {
        Classification::new(
            StatusCode::CredentialsExpired,
            ColorTag::Red,
            "Session expired, log in to Cuco360 again",
        )
    } else {
        Classification::new(StatusCode::Error, ColorTag::Red, err.to_string())
    }
}

/// Share of the requirement covered so far. Not capped, overtime shows
/// above 100.
pub fn progress(working_minutes: i64, required_minutes: i64) -> i64 {
    if required_minutes <= 0 {
        return 0;
    }
    (working_minutes as f64 / required_minutes as f64 * 100.0).round() as i64
}
