use crate::core::calculator::{aggregator, projector};
use crate::db::pool::DbPool;
use crate::db::queries::{load_medications, load_taken_for_date};
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::models::medication::{MedicationInstance, MedicationRecord};
use chrono::NaiveDate;
use std::collections::HashMap;

pub struct Core;

impl Core {
    /// Project one medication onto `date` and merge the taken ordinals from
    /// the dose log. `None` when the medication has no doses that day.
    pub fn instance_for_day(
        record: &MedicationRecord,
        date: NaiveDate,
        taken_ordinals: &[u32],
    ) -> Option<MedicationInstance> {
        let mut doses = projector::project(&record.schedule, date, None);
        if doses.is_empty() {
            return None;
        }

        for dose in &mut doses {
            dose.taken = taken_ordinals.contains(&dose.ordinal);
        }

        Some(MedicationInstance::from_record(record, doses))
    }

    pub fn build_daily_summary(
        records: &[MedicationRecord],
        date: NaiveDate,
        taken: &HashMap<i64, Vec<u32>>,
    ) -> DaySummary {
        let medications: Vec<MedicationInstance> = records
            .iter()
            .filter_map(|r| {
                let ordinals = taken.get(&r.id).map(Vec::as_slice).unwrap_or(&[]);
                Self::instance_for_day(r, date, ordinals)
            })
            .collect();

        let status = aggregator::aggregate(&medications);

        DaySummary {
            date,
            medications,
            status,
        }
    }

    /// Same as [`Core::build_daily_summary`], reading records and the dose log.
    pub fn load_daily_summary(pool: &mut DbPool, date: NaiveDate) -> AppResult<DaySummary> {
        let records = load_medications(pool)?;
        let taken = load_taken_for_date(pool, &date)?;
        Ok(Self::build_daily_summary(&records, date, &taken))
    }
}
