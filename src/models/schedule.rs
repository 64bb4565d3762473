use super::frequency::Frequency;
use crate::errors::AppError;
use crate::utils::time::canonical_24h;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rollover policy between consecutive dose days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextDayMode {
    /// Every eligible day repeats the same clock times.
    #[default]
    Restart,
    /// The first dose of a day follows the previous day's last dose by one interval.
    Continue,
}

impl FromStr for NextDayMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restart" => Ok(Self::Restart),
            "continue" => Ok(Self::Continue),
            other => Err(AppError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for NextDayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restart => write!(f, "restart"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

/// Prescription length in days, or no end at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationDays {
    Days(u32),
    #[default]
    Ongoing,
}

impl DurationDays {
    /// True once `days_diff` lies past the last prescribed day.
    pub fn has_ended(&self, days_diff: i64) -> bool {
        match self {
            Self::Days(n) => days_diff >= i64::from(*n),
            Self::Ongoing => false,
        }
    }
}

impl FromStr for DurationDays {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_lowercase();
        if t == "ongoing" {
            return Ok(Self::Ongoing);
        }
        match t.trim_end_matches('d').parse::<u32>() {
            Ok(n) if n > 0 => Ok(Self::Days(n)),
            _ => Err(AppError::InvalidDuration(s.to_string())),
        }
    }
}

impl fmt::Display for DurationDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(n) => write!(f, "{n}"),
            Self::Ongoing => write!(f, "ongoing"),
        }
    }
}

/// Immutable prescription definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationSchedule {
    pub frequency: Frequency,
    /// Canonical "HH:MM".
    pub start_time: String,
    /// Inclusive.
    pub start_date: NaiveDate,
    pub duration: DurationDays,
    pub next_day_mode: NextDayMode,
}

impl MedicationSchedule {
    /// Builds a schedule, normalizing `start_time` to 24h form.
    pub fn new(
        frequency: Frequency,
        start_time: &str,
        start_date: NaiveDate,
        duration: DurationDays,
        next_day_mode: NextDayMode,
    ) -> Self {
        Self {
            frequency,
            start_time: canonical_24h(start_time),
            start_date,
            duration,
            next_day_mode,
        }
    }

    /// Whether the day-to-day anchor actually rolls for this schedule.
    pub fn rolls_over(&self) -> bool {
        self.next_day_mode == NextDayMode::Continue && self.frequency.interval_hours().is_some()
    }
}
