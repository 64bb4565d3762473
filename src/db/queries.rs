use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::medication::MedicationRecord;
use crate::models::frequency::Frequency;
use crate::models::schedule::{DurationDays, MedicationSchedule, NextDayMode};
use crate::utils::date::format_date;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::HashMap;
use std::str::FromStr;

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

/// Schedule columns fail closed: an unreadable value falls back to `fallback`
/// so one bad row cannot hide the other medications.
fn parse_column_or<T>(row: &Row, column: &str, fallback: T) -> Result<T>
where
    T: FromStr<Err = AppError> + std::fmt::Display,
{
    let raw: String = row.get(column)?;
    Ok(raw.parse::<T>().unwrap_or_else(|e| {
        tracing::warn!(
            column,
            value = raw.as_str(),
            error = %e,
            fallback = %fallback,
            "unreadable schedule column"
        );
        fallback
    }))
}

pub fn map_row(row: &Row) -> Result<MedicationRecord> {
    let date_str: String = row.get("start_date")?;
    let start_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let start_time: String = row.get("start_time")?;

    let schedule = MedicationSchedule::new(
        parse_column_or(row, "frequency", Frequency::OnceDaily)?,
        &start_time,
        start_date,
        parse_column_or(row, "duration", DurationDays::Ongoing)?,
        parse_column_or(row, "next_day_mode", NextDayMode::Restart)?,
    );

    Ok(MedicationRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        dosage: row.get("dosage")?,
        category: row.get("category")?,
        schedule,
        created_at: row.get("created_at")?,
    })
}

/// Insert a medication and return its new id. `record.id` is ignored.
pub fn insert_medication(conn: &Connection, record: &MedicationRecord) -> AppResult<i64> {
    let s = &record.schedule;
    conn.execute(
        "INSERT INTO medications (name, dosage, category, frequency, start_time, start_date, duration, next_day_mode, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            record.name,
            record.dosage,
            record.category,
            s.frequency.to_string(),
            s.start_time,
            format_date(&s.start_date),
            s.duration.to_string(),
            s.next_day_mode.to_string(),
            record.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_medications(pool: &mut DbPool) -> AppResult<Vec<MedicationRecord>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM medications ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_medication(pool: &mut DbPool, id: i64) -> AppResult<Option<MedicationRecord>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM medications WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Delete a medication with its dose log. Returns the number of medications removed.
pub fn delete_medication(conn: &Connection, id: i64) -> AppResult<usize> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM dose_log WHERE medication_id = ?1", [id])?;
    let removed = tx.execute("DELETE FROM medications WHERE id = ?1", [id])?;
    tx.commit()?;
    Ok(removed)
}

/// Record a dose as taken. Returns false when it was already recorded.
pub fn mark_taken(
    conn: &Connection,
    medication_id: i64,
    date: &NaiveDate,
    ordinal: u32,
) -> AppResult<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO dose_log (medication_id, date, ordinal, taken_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            medication_id,
            format_date(date),
            ordinal,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(changed > 0)
}

/// Remove a taken mark. Returns false when there was none.
pub fn unmark_taken(
    conn: &Connection,
    medication_id: i64,
    date: &NaiveDate,
    ordinal: u32,
) -> AppResult<bool> {
    let changed = conn.execute(
        "DELETE FROM dose_log WHERE medication_id = ?1 AND date = ?2 AND ordinal = ?3",
        params![medication_id, format_date(date), ordinal],
    )?;
    Ok(changed > 0)
}

/// Taken ordinals per medication for one date.
pub fn load_taken_for_date(
    pool: &mut DbPool,
    date: &NaiveDate,
) -> AppResult<HashMap<i64, Vec<u32>>> {
    let mut stmt = pool.conn.prepare(
        "SELECT medication_id, ordinal FROM dose_log
         WHERE date = ?1
         ORDER BY medication_id, ordinal",
    )?;

    let rows = stmt.query_map([format_date(date)], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, u32>(1)?))
    })?;

    let mut out: HashMap<i64, Vec<u32>> = HashMap::new();
    for r in rows {
        let (med, ordinal) = r?;
        out.entry(med).or_default().push(ordinal);
    }
    Ok(out)
}

pub fn load_log(pool: &mut DbPool) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
