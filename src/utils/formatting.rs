//! Formatting utilities used for CLI output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. +02h 25m or -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Seconds as `HH:MM:SS`, for the live counter.
pub fn secs2clock(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Text progress bar, capped visually at `width` even on overtime.
pub fn progress_bar(percent: i64, width: usize) -> String {
    let filled = ((percent.clamp(0, 100) as usize) * width) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
