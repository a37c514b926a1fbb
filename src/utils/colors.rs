/// ANSI color helper utilities for terminal output.
use crate::models::status::ColorTag;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE_BLINK: &str = "\x1b[5;97;1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Terminal rendering of a status color.
pub fn ansi_for(tag: ColorTag) -> &'static str {
    match tag {
        ColorTag::Gray => GREY,
        ColorTag::Green => GREEN,
        ColorTag::Yellow => YELLOW,
        ColorTag::WhiteBlinking => WHITE_BLINK,
        ColorTag::Blue => BLUE,
        ColorTag::Red => RED,
    }
}

pub fn colorize(tag: ColorTag, value: &str) -> String {
    format!("{}{}{}", ansi_for(tag), value, RESET)
}

/// Returns formatting for an optional value: grey when empty or "N/A".
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "N/A" || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
