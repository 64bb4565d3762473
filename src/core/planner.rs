//! Multi-day planner view.
//!
//! Each medication walks the requested dates once with a
//! [`RolloverCursor`], so continue-mode anchors are folded up to the first
//! date a single time and then carried forward.

use crate::core::calculator::projector::RolloverCursor;
use crate::models::dose::DoseLabel;
use crate::models::medication::MedicationRecord;
use crate::utils::date::date_range;
use crate::utils::time::parse_time_to_minutes;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedDose {
    pub medication_id: i64,
    pub medication_name: String,
    pub dosage: String,
    pub time: String,
    pub label: DoseLabel,
    pub ordinal: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub doses: Vec<PlannedDose>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedDay {
    pub date: NaiveDate,
    pub groups: Vec<CategoryGroup>,
}

impl PlannedDay {
    pub fn dose_count(&self) -> usize {
        self.groups.iter().map(|g| g.doses.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All doses of the day regardless of category.
    pub fn doses(&self) -> impl Iterator<Item = (&str, &PlannedDose)> {
        self.groups
            .iter()
            .flat_map(|g| g.doses.iter().map(move |d| (g.category.as_str(), d)))
    }
}

/// Plan `days` consecutive dates starting at `from`.
/// Categories are sorted by name; doses inside a category by time.
pub fn plan_range(records: &[MedicationRecord], from: NaiveDate, days: u32) -> Vec<PlannedDay> {
    let dates = date_range(from, days);
    let mut buckets: Vec<BTreeMap<String, Vec<PlannedDose>>> = vec![BTreeMap::new(); dates.len()];

    for record in records {
        let mut cursor = RolloverCursor::at(&record.schedule, from);

        for (bucket, date) in buckets.iter_mut().zip(&dates) {
            let doses = cursor.project(*date);
            if doses.is_empty() {
                continue;
            }

            bucket
                .entry(record.category.clone())
                .or_default()
                .extend(doses.into_iter().map(|d| PlannedDose {
                    medication_id: record.id,
                    medication_name: record.name.clone(),
                    dosage: record.dosage.clone(),
                    time: d.time,
                    label: d.label,
                    ordinal: d.ordinal,
                }));
        }
    }

    dates
        .into_iter()
        .zip(buckets)
        .map(|(date, bucket)| PlannedDay {
            date,
            groups: bucket
                .into_iter()
                .map(|(category, mut doses)| {
                    doses.sort_by_cached_key(|d| {
                        (
                            parse_time_to_minutes(&d.time),
                            d.medication_name.to_lowercase(),
                            d.ordinal,
                        )
                    });
                    CategoryGroup { category, doses }
                })
                .collect(),
        })
        .collect()
}
