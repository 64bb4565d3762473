use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `--date` argument, defaulting to today.
pub fn parse_optional_date(input: Option<&String>) -> AppResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}

/// Whole calendar days from `start` to `target` (negative when target is earlier).
pub fn days_between(start: NaiveDate, target: NaiveDate) -> i64 {
    target.signed_duration_since(start).num_days()
}

pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// `count` consecutive dates starting at `from`.
pub fn date_range(from: NaiveDate, count: u32) -> Vec<NaiveDate> {
    from.iter_days().take(count as usize).collect()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_weekday(date: &NaiveDate) -> String {
    date.format("%a %d %b").to_string()
}
