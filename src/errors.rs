//! Unified application error type.
//! The CLI, the database layer and the config layer return AppError.
//! The scheduling engine itself never fails: it returns plain values.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid next-day mode: {0}")]
    InvalidMode(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Medication not found: #{0}")]
    MedicationNotFound(i64),

    #[error("Medication #{0} is not scheduled on {1}")]
    NotScheduled(i64, String),

    #[error("Invalid dose number {0} for medication #{1}")]
    InvalidDose(u32, i64),

    #[error("No pending dose left for medication #{0} on {1}")]
    NothingPending(i64, String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
