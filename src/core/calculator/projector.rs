//! Projects a prescription onto calendar dates.
//!
//! Restart schedules repeat the same clock times on every eligible day.
//! Continue schedules roll the first dose of each day forward from the
//! previous day's last dose, which makes day N a fold over days 0..N.
//! Both the caller-supplied fast path and the iterative path go through
//! [`roll_forward`], so they agree exactly.

use super::dose_times::{calculate_dose_times, last_dose_time};
use crate::models::dose::DoseOccurrence;
use crate::models::schedule::MedicationSchedule;
use crate::utils::date::days_between;
use crate::utils::time::add_minutes;
use chrono::NaiveDate;

/// Day offset of `target` from the start date when the calendar gates let
/// doses happen on it: not before start, not past the duration, and on the
/// frequency's cadence.
pub fn dose_day_offset(schedule: &MedicationSchedule, target: NaiveDate) -> Option<i64> {
    let days_diff = days_between(schedule.start_date, target);

    if days_diff < 0 || schedule.duration.has_ended(days_diff) {
        return None;
    }

    schedule
        .frequency
        .is_dose_day(days_diff)
        .then_some(days_diff)
}

pub fn is_scheduled_on(schedule: &MedicationSchedule, target: NaiveDate) -> bool {
    dose_day_offset(schedule, target).is_some()
}

/// The rollover step: next day's anchor given the previous day's last dose.
/// Schedules that do not roll always restart at their start time.
pub fn roll_forward(schedule: &MedicationSchedule, previous_last: Option<&str>) -> String {
    match (schedule.rolls_over(), schedule.frequency.interval_hours(), previous_last) {
        (true, Some(hours), Some(last)) => add_minutes(last, i64::from(hours) * 60),
        _ => schedule.start_time.clone(),
    }
}

/// Anchor of day `days_diff`, folded from the start date.
pub fn anchor_for_day(schedule: &MedicationSchedule, days_diff: i64) -> String {
    if !schedule.rolls_over() || days_diff <= 0 {
        return schedule.start_time.clone();
    }

    (0..days_diff).fold(schedule.start_time.clone(), |anchor, _| {
        let doses = calculate_dose_times(&anchor, &schedule.frequency);
        roll_forward(schedule, last_dose_time(&doses))
    })
}

/// Doses of `schedule` on `target`.
///
/// `previous_last` is the time of the last dose on the previous day, as the
/// caller projected it. When given, continue schedules skip the fold. It is
/// ignored on the start date and for schedules that do not roll.
pub fn project(
    schedule: &MedicationSchedule,
    target: NaiveDate,
    previous_last: Option<&str>,
) -> Vec<DoseOccurrence> {
    let Some(days_diff) = dose_day_offset(schedule, target) else {
        return Vec::new();
    };

    let anchor = match previous_last {
        _ if !schedule.rolls_over() || days_diff == 0 => schedule.start_time.clone(),
        Some(prev) => roll_forward(schedule, Some(prev)),
        None => anchor_for_day(schedule, days_diff),
    };

    tracing::debug!(
        %target,
        days_diff,
        anchor = anchor.as_str(),
        frequency = %schedule.frequency,
        "projecting doses"
    );

    calculate_dose_times(&anchor, &schedule.frequency)
}

/// Carries the rolled anchor from one day to the next, so that walking
/// many consecutive dates costs one step per date instead of a full fold.
#[derive(Debug, Clone)]
pub struct RolloverCursor<'a> {
    schedule: &'a MedicationSchedule,
    day: i64,
    anchor: String,
}

impl<'a> RolloverCursor<'a> {
    /// Cursor positioned on `target` (or on the start date when earlier).
    pub fn at(schedule: &'a MedicationSchedule, target: NaiveDate) -> Self {
        let day = days_between(schedule.start_date, target).max(0);
        Self {
            schedule,
            day,
            anchor: anchor_for_day(schedule, day),
        }
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Move to the following day.
    pub fn advance(&mut self) {
        if self.schedule.rolls_over() {
            let doses = calculate_dose_times(&self.anchor, &self.schedule.frequency);
            self.anchor = roll_forward(self.schedule, last_dose_time(&doses));
        }
        self.day += 1;
    }

    /// Doses on `target`, advancing the cursor up to it first.
    /// Dates before the cursor's day are not revisited.
    pub fn project(&mut self, target: NaiveDate) -> Vec<DoseOccurrence> {
        let Some(days_diff) = dose_day_offset(self.schedule, target) else {
            return Vec::new();
        };
        while self.day < days_diff {
            self.advance();
        }
        if self.day != days_diff {
            return project(self.schedule, target, None);
        }
        calculate_dose_times(&self.anchor, &self.schedule.frequency)
    }
}
