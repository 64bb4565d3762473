use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Schema steps, applied in order. Each one is recorded in the `log` table
/// as a `migration_applied` row and never runs twice.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_medications",
        "Created medications and dose_log tables",
        r#"
        CREATE TABLE IF NOT EXISTS medications (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            name           TEXT NOT NULL,
            dosage         TEXT NOT NULL DEFAULT '',
            category       TEXT NOT NULL DEFAULT 'general',
            frequency      TEXT NOT NULL,
            start_time     TEXT NOT NULL,
            start_date     TEXT NOT NULL,
            duration       TEXT NOT NULL DEFAULT 'ongoing',
            next_day_mode  TEXT NOT NULL DEFAULT 'restart'
                           CHECK(next_day_mode IN ('restart','continue')),
            created_at     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS dose_log (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            medication_id  INTEGER NOT NULL REFERENCES medications(id) ON DELETE CASCADE,
            date           TEXT NOT NULL,
            ordinal        INTEGER NOT NULL CHECK(ordinal >= 1),
            taken_at       TEXT NOT NULL,
            UNIQUE(medication_id, date, ordinal)
        );
        "#,
    ),
    (
        "20250301_0002_dose_log_indexes",
        "Indexed dose_log by date",
        r#"
        CREATE INDEX IF NOT EXISTS idx_dose_log_date ON dose_log(date);
        CREATE INDEX IF NOT EXISTS idx_dose_log_med_date ON dose_log(medication_id, date);
        "#,
    ),
];

/// Ensure that the `log` table exists: migrations are tracked there.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        conn.execute_batch(sql)
            .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, message],
        )?;

        tracing::info!(version, "migration applied");
        success(format!("Migration applied: {version}"));
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_migrations(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
