/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Taken doses fade to grey, pending ones stay bright.
pub fn color_for_dose(taken: bool) -> &'static str {
    if taken { GREY } else { CYAN }
}

/// Adherence color:
/// 100 → green
/// \>= 50 → yellow
/// otherwise → red
pub fn color_for_adherence(percent: u32) -> &'static str {
    if percent >= 100 {
        GREEN
    } else if percent >= 50 {
        YELLOW
    } else {
        RED
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
