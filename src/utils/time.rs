//! Time-of-day codec: 12h/24h parsing and formatting, clock arithmetic.
//! Values are local wall-clock strings; there is no date and no timezone here.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

static TWELVE_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*([ap])\.?m\.?$").unwrap());

static TWENTY_FOUR_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

/// How times are rendered to the user. Storage is always 24h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "24h")]
    H24,
}

impl FromStr for TimeFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "12h" | "12" => Ok(Self::H12),
            "24h" | "24" => Ok(Self::H24),
            other => Err(AppError::Config(format!("unknown time format '{other}'"))),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::H12 => write!(f, "12h"),
            Self::H24 => write!(f, "24h"),
        }
    }
}

/// Strict parse of "H:MM AM/PM" (case-insensitive) or "HH:MM".
/// Returns `None` when the input is not a valid time of day.
pub fn try_parse_time_to_minutes(input: &str) -> Option<u32> {
    let s = input.trim();

    if let Some(caps) = TWELVE_HOUR.captures(s) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }
        let is_pm = caps[3].eq_ignore_ascii_case("p");
        let hour24 = match (hour, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        return Some(hour24 * 60 + minute);
    }

    if let Some(caps) = TWENTY_FOUR_HOUR.captures(s) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }
        return Some(hour * 60 + minute);
    }

    None
}

/// Fail-closed parse: anything unparseable becomes 0 (midnight).
///
/// A 0 coming out of here means "unknown, assume start of day", never a
/// confirmed midnight dose.
pub fn parse_time_to_minutes(input: &str) -> u32 {
    try_parse_time_to_minutes(input).unwrap_or_else(|| {
        tracing::warn!(input, "unparseable time of day, assuming 00:00");
        0
    })
}

/// "HH:MM", zero padded.
pub fn format_minutes_24h(minutes: u32) -> String {
    let m = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// "H:MM AM" / "H:MM PM".
pub fn format_minutes_12h(minutes: u32) -> String {
    let m = minutes % MINUTES_PER_DAY;
    let hour = m / 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, m % 60, suffix)
}

/// Clock addition modulo 24h. Negative deltas wrap backwards.
pub fn add_minutes(time_24h: &str, delta_minutes: i64) -> String {
    let base = i64::from(parse_time_to_minutes(time_24h));
    let wrapped = (base + delta_minutes).rem_euclid(i64::from(MINUTES_PER_DAY));
    format_minutes_24h(wrapped as u32)
}

/// Normalizes any accepted representation to "HH:MM" (fail-closed).
pub fn canonical_24h(input: &str) -> String {
    format_minutes_24h(parse_time_to_minutes(input))
}

/// Boundary validation for user input: rejects what the engine would coerce.
pub fn parse_time_strict(input: &str) -> AppResult<String> {
    try_parse_time_to_minutes(input)
        .map(format_minutes_24h)
        .ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

/// Renders a stored 24h time for display. Never mutates stored state.
pub fn display_time(time_24h: &str, format: TimeFormat) -> String {
    let minutes = parse_time_to_minutes(time_24h);
    match format {
        TimeFormat::H12 => format_minutes_12h(minutes),
        TimeFormat::H24 => format_minutes_24h(minutes),
    }
}
