use crate::models::status::WorkStatus;
use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW, colorize, colorize_optional};
use crate::utils::formatting::{bold, mins2readable, progress_bar, secs2clock};
use std::fmt;

const BOLD: &str = "\x1b[1m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Multi-line, colored rendering of a work status for the terminal.
pub fn render_status(status: &WorkStatus) -> String {
    let mut out = format!(
        "{} {}\n",
        colorize(status.color, &bold(status.status.as_str())),
        status.message
    );

    if status.working_minutes > 0 || status.presence_minutes > 0 {
        out.push_str(&format!(
            "  Working : {} ({})\n",
            mins2readable(status.working_minutes, false, false),
            secs2clock(status.working_seconds)
        ));
        out.push_str(&format!(
            "  Presence: {}\n",
            mins2readable(status.presence_minutes, false, false)
        ));
        out.push_str(&format!(
            "  Exit    : {}   Remaining: {}\n",
            colorize_optional(&status.theoretical_exit),
            mins2readable(status.remaining_minutes, false, false)
        ));
        out.push_str(&format!(
            "  Progress: {} {}%\n",
            progress_bar(status.progress, 20),
            status.progress
        ));
    }

    out
}

pub fn print_status(status: &WorkStatus) {
    print!("{}", render_status(status));
}
