use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_medication, load_medication};
use crate::errors::{AppError, AppResult};

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let record = load_medication(pool, id)?.ok_or(AppError::MedicationNotFound(id))?;

        delete_medication(&pool.conn, id)?;

        ttlog_or_warn(
            &pool.conn,
            "del",
            &format!("#{} {}", id, record.name),
            "Medication and dose log deleted",
        );

        Ok(())
    }
}
