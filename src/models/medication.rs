use super::dose::DoseOccurrence;
use super::schedule::MedicationSchedule;
use serde::Serialize;

/// A stored medication: identity and display data plus its prescription.
#[derive(Debug, Clone, Serialize)]
pub struct MedicationRecord {
    pub id: i64,
    pub name: String,
    pub dosage: String,
    pub category: String,
    pub schedule: MedicationSchedule,
    pub created_at: String, // ISO8601
}

/// What a caller holds for one day: the prescription plus that day's doses,
/// with taken flags merged in from the dose log.
///
/// An empty `doses` list means a legacy single-dose medication: it counts as
/// one implicit occurrence at `schedule.start_time`, tracked by `taken`.
#[derive(Debug, Clone, Serialize)]
pub struct MedicationInstance {
    pub id: i64,
    pub name: String,
    pub dosage: String,
    pub category: String,
    pub schedule: MedicationSchedule,
    pub doses: Vec<DoseOccurrence>,
    pub taken: bool,
}

impl MedicationInstance {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        schedule: MedicationSchedule,
        doses: Vec<DoseOccurrence>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            dosage: String::new(),
            category: String::new(),
            schedule,
            doses,
            taken: false,
        }
    }

    /// Single-dose legacy form carrying its own taken flag.
    pub fn single_dose(
        id: i64,
        name: impl Into<String>,
        schedule: MedicationSchedule,
        taken: bool,
    ) -> Self {
        Self {
            taken,
            ..Self::new(id, name, schedule, Vec::new())
        }
    }

    pub fn from_record(record: &MedicationRecord, doses: Vec<DoseOccurrence>) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            dosage: record.dosage.clone(),
            category: record.category.clone(),
            schedule: record.schedule.clone(),
            doses,
            taken: false,
        }
    }

    pub fn is_single_dose(&self) -> bool {
        self.doses.is_empty()
    }

    pub fn dose_count(&self) -> usize {
        if self.is_single_dose() {
            1
        } else {
            self.doses.len()
        }
    }

    pub fn taken_count(&self) -> usize {
        if self.is_single_dose() {
            usize::from(self.taken)
        } else {
            self.doses.iter().filter(|d| d.taken).count()
        }
    }

    /// Every dose of the day is taken.
    pub fn is_complete(&self) -> bool {
        self.taken_count() == self.dose_count()
    }
}
