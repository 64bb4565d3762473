//! Cross-medication view of one day: totals, pending doses, next dose.

use crate::models::dose::DoseLabel;
use crate::models::medication::MedicationInstance;
use crate::utils::time::parse_time_to_minutes;
use serde::Serialize;
use std::collections::HashSet;

/// Counted per dose: a medication with N doses contributes N.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DoseTotals {
    pub total_doses: usize,
    pub taken_doses: usize,
}

impl DoseTotals {
    pub fn pending_doses(&self) -> usize {
        self.total_doses.saturating_sub(self.taken_doses)
    }

    /// Whole percentage of doses taken; 0 when nothing is scheduled.
    pub fn adherence_percent(&self) -> u32 {
        if self.total_doses == 0 {
            return 0;
        }
        ((self.taken_doses * 100) / self.total_doses) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingDose {
    pub medication_id: i64,
    pub medication_name: String,
    pub dosage: String,
    pub time: String,
    pub label: DoseLabel,
    pub ordinal: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DoseStatus {
    pub totals: DoseTotals,
    pub pending: Vec<PendingDose>,
    pub next: Option<PendingDose>,
}

impl DoseStatus {
    /// Nothing scheduled at all.
    pub fn is_empty(&self) -> bool {
        self.totals.total_doses == 0
    }

    /// Doses exist and every one of them is taken.
    pub fn all_taken(&self) -> bool {
        !self.is_empty() && self.pending.is_empty()
    }

    /// Distinct medications that still have something pending.
    pub fn pending_medications(&self) -> usize {
        self.pending
            .iter()
            .map(|p| p.medication_id)
            .collect::<HashSet<_>>()
            .len()
    }
}

pub fn count_totals(medications: &[MedicationInstance]) -> DoseTotals {
    medications
        .iter()
        .fold(DoseTotals::default(), |acc, med| DoseTotals {
            total_doses: acc.total_doses + med.dose_count(),
            taken_doses: acc.taken_doses + med.taken_count(),
        })
}

/// Untaken doses ordered by time of day.
///
/// Ties at the same time are broken by medication name (case-insensitive),
/// then by ordinal; whatever still ties keeps input order.
pub fn pending_doses(medications: &[MedicationInstance]) -> Vec<PendingDose> {
    let mut pending = Vec::new();

    for med in medications {
        if med.is_single_dose() {
            if !med.taken {
                pending.push(PendingDose {
                    medication_id: med.id,
                    medication_name: med.name.clone(),
                    dosage: med.dosage.clone(),
                    time: med.schedule.start_time.clone(),
                    label: DoseLabel::Daily,
                    ordinal: 1,
                });
            }
            continue;
        }

        pending.extend(med.doses.iter().filter(|d| !d.taken).map(|d| PendingDose {
            medication_id: med.id,
            medication_name: med.name.clone(),
            dosage: med.dosage.clone(),
            time: d.time.clone(),
            label: d.label,
            ordinal: d.ordinal,
        }));
    }

    pending.sort_by_cached_key(|p| {
        (
            parse_time_to_minutes(&p.time),
            p.medication_name.to_lowercase(),
            p.ordinal,
        )
    });

    pending
}

pub fn aggregate(medications: &[MedicationInstance]) -> DoseStatus {
    let totals = count_totals(medications);
    let pending = pending_doses(medications);
    let next = pending.first().cloned();

    DoseStatus {
        totals,
        pending,
        next,
    }
}
