use serde::Serialize;
use std::fmt;

/// Most doses a single calendar day can hold.
pub const MAX_DOSES_PER_DAY: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DoseLabel {
    Daily,
    Morning,
    Midday,
    Afternoon,
    Evening,
    /// Past the fourth ordinal; the per-day cap keeps this out of real schedules.
    Dose,
}

impl DoseLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Morning => "Morning",
            Self::Midday => "Midday",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Dose => "Dose",
        }
    }
}

impl fmt::Display for DoseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for the n-th (1-based) dose of a multi-dose day.
pub fn label_for_ordinal(ordinal: u32) -> DoseLabel {
    match ordinal {
        1 => DoseLabel::Morning,
        2 => DoseLabel::Midday,
        3 => DoseLabel::Afternoon,
        4 => DoseLabel::Evening,
        _ => DoseLabel::Dose,
    }
}

/// One concrete intake on one day. Derived, never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoseOccurrence {
    /// "HH:MM"
    pub time: String,
    pub label: DoseLabel,
    pub ordinal: u32,
    /// Owned by the caller's dose log; the engine always emits `false`.
    pub taken: bool,
}

impl DoseOccurrence {
    pub fn new(time: String, label: DoseLabel, ordinal: u32) -> Self {
        Self {
            time,
            label,
            ordinal,
            taken: false,
        }
    }
}
