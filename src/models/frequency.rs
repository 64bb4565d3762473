use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interval used when a custom schedule carries no usable interval.
pub const DEFAULT_CUSTOM_INTERVAL_HOURS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    OnceDaily,
    TwiceDaily,
    ThreeTimesDaily,
    FourTimesDaily,
    EveryOtherDay,
    Weekly,
    AsNeeded,
    Custom { interval_hours: u32 },
}

impl Frequency {
    /// Spacing between doses within a day, for multi-dose frequencies.
    /// `None` means one dose per scheduled day.
    pub fn interval_hours(&self) -> Option<u32> {
        match self {
            Self::TwiceDaily => Some(12),
            Self::ThreeTimesDaily => Some(8),
            Self::FourTimesDaily => Some(6),
            Self::Custom { interval_hours } if *interval_hours > 0 => Some(*interval_hours),
            Self::Custom { .. } => Some(DEFAULT_CUSTOM_INTERVAL_HOURS),
            Self::OnceDaily | Self::EveryOtherDay | Self::Weekly | Self::AsNeeded => None,
        }
    }

    /// Day cadence gate: whether a dose day falls `days_diff` days after start.
    pub fn is_dose_day(&self, days_diff: i64) -> bool {
        match self {
            Self::Weekly => days_diff.rem_euclid(7) == 0,
            Self::EveryOtherDay => days_diff.rem_euclid(2) == 0,
            Self::AsNeeded => days_diff == 0,
            _ => true,
        }
    }

    /// Human description for listings.
    pub fn describe(&self) -> String {
        match self {
            Self::OnceDaily => "once daily".into(),
            Self::TwiceDaily => "twice daily".into(),
            Self::ThreeTimesDaily => "3x daily".into(),
            Self::FourTimesDaily => "4x daily".into(),
            Self::EveryOtherDay => "every other day".into(),
            Self::Weekly => "weekly".into(),
            Self::AsNeeded => "as needed".into(),
            Self::Custom { .. } => format!(
                "every {}h",
                self.interval_hours().unwrap_or(DEFAULT_CUSTOM_INTERVAL_HOURS)
            ),
        }
    }
}

impl FromStr for Frequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "once_daily" | "daily" => Ok(Self::OnceDaily),
            "twice_daily" => Ok(Self::TwiceDaily),
            "three_times_daily" => Ok(Self::ThreeTimesDaily),
            "four_times_daily" => Ok(Self::FourTimesDaily),
            "every_other_day" => Ok(Self::EveryOtherDay),
            "weekly" => Ok(Self::Weekly),
            "as_needed" => Ok(Self::AsNeeded),
            "custom" => Ok(Self::Custom {
                interval_hours: DEFAULT_CUSTOM_INTERVAL_HOURS,
            }),
            other => {
                let hours = other
                    .strip_prefix("custom:")
                    .and_then(|h| h.trim_end_matches('h').parse::<u32>().ok())
                    .ok_or_else(|| AppError::InvalidFrequency(s.to_string()))?;
                Ok(Self::Custom {
                    interval_hours: hours,
                })
            }
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnceDaily => write!(f, "once_daily"),
            Self::TwiceDaily => write!(f, "twice_daily"),
            Self::ThreeTimesDaily => write!(f, "three_times_daily"),
            Self::FourTimesDaily => write!(f, "four_times_daily"),
            Self::EveryOtherDay => write!(f, "every_other_day"),
            Self::Weekly => write!(f, "weekly"),
            Self::AsNeeded => write!(f, "as_needed"),
            Self::Custom { interval_hours } => write!(f, "custom:{interval_hours}"),
        }
    }
}
