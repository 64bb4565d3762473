use crate::core::logic::Core;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{load_medication, load_taken_for_date, mark_taken, unmark_taken};
use crate::errors::{AppError, AppResult};
use crate::models::dose::DoseOccurrence;
use chrono::NaiveDate;

/// Marks doses taken or untaken in the dose log.
pub struct TakeLogic;

impl TakeLogic {
    /// Without an explicit `ordinal`, taking picks the first pending dose and
    /// undoing picks the last taken one. Returns the dose as it is now.
    pub fn apply(
        pool: &mut DbPool,
        id: i64,
        date: NaiveDate,
        ordinal: Option<u32>,
        undo: bool,
    ) -> AppResult<DoseOccurrence> {
        let record = load_medication(pool, id)?.ok_or(AppError::MedicationNotFound(id))?;
        let taken = load_taken_for_date(pool, &date)?;
        let ordinals = taken.get(&id).map(Vec::as_slice).unwrap_or(&[]);

        let instance = Core::instance_for_day(&record, date, ordinals)
            .ok_or_else(|| AppError::NotScheduled(id, date.to_string()))?;

        let dose = match ordinal {
            Some(n) => instance
                .doses
                .iter()
                .find(|d| d.ordinal == n)
                .ok_or(AppError::InvalidDose(n, id))?,
            None if undo => instance
                .doses
                .iter()
                .rev()
                .find(|d| d.taken)
                .ok_or_else(|| AppError::NothingPending(id, date.to_string()))?,
            None => instance
                .doses
                .iter()
                .find(|d| !d.taken)
                .ok_or_else(|| AppError::NothingPending(id, date.to_string()))?,
        };

        let changed = if undo {
            unmark_taken(&pool.conn, id, &date, dose.ordinal)?
        } else {
            mark_taken(&pool.conn, id, &date, dose.ordinal)?
        };

        if changed {
            ttlog_or_warn(
                &pool.conn,
                if undo { "untake" } else { "take" },
                &format!("#{} {}", id, record.name),
                &format!("{} dose {} ({}) at {}", date, dose.ordinal, dose.label, dose.time),
            );
        }

        Ok(DoseOccurrence {
            taken: !undo,
            ..dose.clone()
        })
    }
}
