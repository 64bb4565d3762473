//! Plain-language phrasing of a day's dose status, for the terminal and
//! for assistant context.

use crate::core::calculator::aggregator::{DoseStatus, PendingDose};
use crate::utils::time::{TimeFormat, display_time};

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// "Losartan at 8:00 PM"
pub fn describe_dose(dose: &PendingDose, format: TimeFormat) -> String {
    format!(
        "{} at {}",
        dose.medication_name,
        display_time(&dose.time, format)
    )
}

pub fn briefing(status: &DoseStatus, format: TimeFormat) -> String {
    if status.is_empty() {
        return "No medications scheduled for today.".to_string();
    }

    if status.all_taken() {
        return format!(
            "All {} taken today. Great job!",
            plural(status.totals.total_doses, "dose", "doses")
        );
    }

    let mut out = format!(
        "{} left today ({} pending).",
        plural(status.pending_medications(), "medicine", "medicines"),
        plural(status.totals.pending_doses(), "dose", "doses")
    );

    if let Some(next) = &status.next {
        out.push_str(&format!(" Next up: {}.", describe_dose(next, format)));
    }

    out
}
