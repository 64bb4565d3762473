use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::insert_medication;
use crate::errors::{AppError, AppResult};
use crate::models::medication::MedicationRecord;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Store a new medication and return its id.
    pub fn apply(pool: &mut DbPool, record: &MedicationRecord) -> AppResult<i64> {
        if record.name.trim().is_empty() {
            return Err(AppError::Config("medication name cannot be empty".into()));
        }

        let id = insert_medication(&pool.conn, record)?;
        let s = &record.schedule;

        ttlog_or_warn(
            &pool.conn,
            "add",
            &format!("#{} {}", id, record.name),
            &format!(
                "{} from {} at {} ({} days, {})",
                s.frequency, s.start_date, s.start_time, s.duration, s.next_day_mode
            ),
        );

        success(format!(
            "Added #{} {} ({}, starting {} at {})",
            id,
            record.name,
            s.frequency.describe(),
            s.start_date,
            s.start_time
        ));

        Ok(id)
    }
}
