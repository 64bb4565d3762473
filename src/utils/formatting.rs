//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad on the right to a visible width (emoji and CJK aware).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

/// Cut to `max` characters, ending with "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Check mark used in day views.
pub fn taken_mark(taken: bool) -> &'static str {
    if taken { "✔" } else { "·" }
}

/// "3/5 (60%)"
pub fn progress(taken: usize, total: usize, percent: u32) -> String {
    format!("{}/{} ({}%)", taken, total, percent)
}

/// Horizontal rule built from the configured separator.
pub fn separator(sep: &str, width: usize) -> String {
    let unit = if sep.is_empty() { "-" } else { sep };
    unit.repeat(width.div_ceil(unit.width().max(1)))
}
