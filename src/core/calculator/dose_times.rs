//! Single-day dose layout.

use crate::models::dose::{DoseLabel, DoseOccurrence, MAX_DOSES_PER_DAY, label_for_ordinal};
use crate::models::frequency::Frequency;
use crate::utils::time::{MINUTES_PER_DAY, format_minutes_24h, parse_time_to_minutes};

/// Produce the ordered doses of one day starting at `start_time_24h`.
///
/// Single-dose frequencies yield one "Daily" dose. Interval frequencies
/// yield `start + k * interval` while the dose still falls before 24:00 of
/// the same day, up to [`MAX_DOSES_PER_DAY`]. Never fails: a malformed
/// start time anchors the day at 00:00.
pub fn calculate_dose_times(start_time_24h: &str, frequency: &Frequency) -> Vec<DoseOccurrence> {
    let start = parse_time_to_minutes(start_time_24h);

    let Some(interval_hours) = frequency.interval_hours() else {
        return vec![DoseOccurrence::new(
            format_minutes_24h(start),
            DoseLabel::Daily,
            1,
        )];
    };

    let interval = interval_hours.saturating_mul(60);
    let mut doses = Vec::new();
    let mut offset = 0;

    while (doses.len() as u32) < MAX_DOSES_PER_DAY
        && offset < MINUTES_PER_DAY
        && start + offset < MINUTES_PER_DAY
    {
        let ordinal = doses.len() as u32 + 1;
        doses.push(DoseOccurrence::new(
            format_minutes_24h(start + offset),
            label_for_ordinal(ordinal),
            ordinal,
        ));
        offset = offset.saturating_add(interval);
    }

    doses
}

/// Time of the last dose in a day's layout, if any.
pub fn last_dose_time(doses: &[DoseOccurrence]) -> Option<&str> {
    doses.last().map(|d| d.time.as_str())
}
