use crate::core::planner::PlannedDay;
use crate::utils::date::format_date;
use serde::Serialize;

/// Flat row of a planner export: one planned dose.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PlanExportRow {
    pub date: String,
    pub category: String,
    pub medication_id: i64,
    pub medication: String,
    pub dosage: String,
    pub time: String,
    pub label: String,
    pub ordinal: u32,
}

impl PlanExportRow {
    pub fn from_days(days: &[PlannedDay]) -> Vec<Self> {
        days.iter()
            .flat_map(|day| {
                let date = format_date(&day.date);
                day.doses().map(move |(category, dose)| Self {
                    date: date.clone(),
                    category: category.to_string(),
                    medication_id: dose.medication_id,
                    medication: dose.medication_name.clone(),
                    dosage: dose.dosage.clone(),
                    time: dose.time.clone(),
                    label: dose.label.to_string(),
                    ordinal: dose.ordinal,
                })
            })
            .collect()
    }
}
