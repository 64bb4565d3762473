#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rdoseplan::models::frequency::Frequency;
use rdoseplan::models::medication::MedicationRecord;
use rdoseplan::models::schedule::{DurationDays, MedicationSchedule, NextDayMode};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdp() -> Command {
    cargo_bin_cmd!("rdoseplan")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdoseplan.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test DB (no config file written)
pub fn init_db(db_path: &str) {
    rdp()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn schedule(
    frequency: &str,
    start_time: &str,
    start_date: &str,
    duration: DurationDays,
    mode: NextDayMode,
) -> MedicationSchedule {
    let frequency: Frequency = frequency.parse().expect("valid test frequency");
    MedicationSchedule::new(frequency, start_time, date(start_date), duration, mode)
}

pub fn daily_schedule(frequency: &str, start_time: &str, start_date: &str) -> MedicationSchedule {
    schedule(
        frequency,
        start_time,
        start_date,
        DurationDays::Ongoing,
        NextDayMode::Restart,
    )
}

pub fn record(id: i64, name: &str, category: &str, schedule: MedicationSchedule) -> MedicationRecord {
    MedicationRecord {
        id,
        name: name.to_string(),
        dosage: String::new(),
        category: category.to_string(),
        schedule,
        created_at: "2025-03-01T08:00:00+00:00".to_string(),
    }
}

pub fn times(doses: &[rdoseplan::models::dose::DoseOccurrence]) -> Vec<String> {
    doses.iter().map(|d| d.time.clone()).collect()
}
