use crate::core::calculator::aggregator::DoseStatus;
use crate::models::medication::MedicationInstance;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub medications: Vec<MedicationInstance>,
    pub status: DoseStatus,
}
