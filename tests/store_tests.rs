mod common;
use common::{daily_schedule, date, record, schedule};
use rdoseplan::core::add::AddLogic;
use rdoseplan::core::del::DeleteLogic;
use rdoseplan::core::logic::Core;
use rdoseplan::core::take::TakeLogic;
use rdoseplan::db::migrate::{applied_migrations, run_pending_migrations};
use rdoseplan::db::pool::DbPool;
use rdoseplan::db::queries::{
    delete_medication, load_log, load_medication, load_medications, load_taken_for_date,
};
use rdoseplan::errors::AppError;
use rdoseplan::models::dose::DoseLabel;
use rdoseplan::models::frequency::Frequency;
use rdoseplan::models::schedule::{DurationDays, NextDayMode};

fn pool() -> DbPool {
    DbPool::in_memory().expect("in-memory database")
}

#[test]
fn test_migrations_are_recorded_once() {
    let pool = pool();
    let applied = applied_migrations(&pool.conn).unwrap();
    assert_eq!(
        applied,
        vec![
            "20250301_0001_create_medications",
            "20250301_0002_dose_log_indexes"
        ]
    );

    run_pending_migrations(&pool.conn).unwrap();
    assert_eq!(applied_migrations(&pool.conn).unwrap().len(), 2);
}

#[test]
fn test_add_and_load_round_trip_the_schedule() {
    let mut pool = pool();
    let s = schedule(
        "custom:6",
        "7:15 PM",
        "2025-03-10",
        DurationDays::Days(14),
        NextDayMode::Continue,
    );
    let id = AddLogic::apply(&mut pool, &record(0, "Amoxicillin", "antibiotic", s.clone())).unwrap();

    let loaded = load_medication(&mut pool, id).unwrap().expect("stored");
    assert_eq!(loaded.name, "Amoxicillin");
    assert_eq!(loaded.category, "antibiotic");
    assert_eq!(loaded.schedule, s);
    assert_eq!(loaded.schedule.start_time, "19:15");
    assert_eq!(load_medications(&mut pool).unwrap().len(), 1);
}

#[test]
fn test_add_rejects_blank_name() {
    let mut pool = pool();
    let r = record(0, "  ", "general", daily_schedule("once_daily", "08:00", "2025-03-10"));
    assert!(AddLogic::apply(&mut pool, &r).is_err());
}

#[test]
fn test_take_marks_first_pending_then_next() {
    let mut pool = pool();
    let id = AddLogic::apply(
        &mut pool,
        &record(0, "Losartan", "heart", daily_schedule("twice_daily", "08:00", "2025-03-10")),
    )
    .unwrap();
    let day = date("2025-03-12");

    let first = TakeLogic::apply(&mut pool, id, day, None, false).unwrap();
    assert_eq!((first.ordinal, first.time.as_str(), first.taken), (1, "08:00", true));

    let second = TakeLogic::apply(&mut pool, id, day, None, false).unwrap();
    assert_eq!(second.ordinal, 2);

    let summary = Core::load_daily_summary(&mut pool, day).unwrap();
    assert!(summary.status.all_taken());

    let err = TakeLogic::apply(&mut pool, id, day, None, false).unwrap_err();
    assert!(matches!(err, AppError::NothingPending(_, _)));
}

#[test]
fn test_undo_removes_the_last_taken_dose() {
    let mut pool = pool();
    let id = AddLogic::apply(
        &mut pool,
        &record(0, "Losartan", "heart", daily_schedule("twice_daily", "08:00", "2025-03-10")),
    )
    .unwrap();
    let day = date("2025-03-10");

    TakeLogic::apply(&mut pool, id, day, Some(2), false).unwrap();
    let undone = TakeLogic::apply(&mut pool, id, day, None, true).unwrap();
    assert_eq!(undone.ordinal, 2);
    assert!(!undone.taken);

    assert!(load_taken_for_date(&mut pool, &day).unwrap().is_empty());
}

#[test]
fn test_take_is_idempotent_per_ordinal() {
    let mut pool = pool();
    let id = AddLogic::apply(
        &mut pool,
        &record(0, "Vitamin D", "general", daily_schedule("once_daily", "07:30", "2025-03-10")),
    )
    .unwrap();
    let day = date("2025-03-10");

    TakeLogic::apply(&mut pool, id, day, Some(1), false).unwrap();
    TakeLogic::apply(&mut pool, id, day, Some(1), false).unwrap();

    let taken = load_taken_for_date(&mut pool, &day).unwrap();
    assert_eq!(taken.get(&id), Some(&vec![1]));
    let takes = load_log(&mut pool)
        .unwrap()
        .into_iter()
        .filter(|(_, _, op, _, _)| op == "take")
        .count();
    assert_eq!(takes, 1);
}

#[test]
fn test_take_rejects_unscheduled_days_and_bad_ordinals() {
    let mut pool = pool();
    let id = AddLogic::apply(
        &mut pool,
        &record(0, "B12", "general", daily_schedule("every_other_day", "07:00", "2025-03-10")),
    )
    .unwrap();

    let off_day = TakeLogic::apply(&mut pool, id, date("2025-03-11"), None, false).unwrap_err();
    assert!(matches!(off_day, AppError::NotScheduled(_, _)));

    let bad = TakeLogic::apply(&mut pool, id, date("2025-03-12"), Some(3), false).unwrap_err();
    assert!(matches!(bad, AppError::InvalidDose(3, _)));

    let missing = TakeLogic::apply(&mut pool, 999, date("2025-03-12"), None, false).unwrap_err();
    assert!(matches!(missing, AppError::MedicationNotFound(999)));
}

#[test]
fn test_delete_drops_the_dose_log() {
    let mut pool = pool();
    let id = AddLogic::apply(
        &mut pool,
        &record(0, "Losartan", "heart", daily_schedule("twice_daily", "08:00", "2025-03-10")),
    )
    .unwrap();
    let day = date("2025-03-10");
    TakeLogic::apply(&mut pool, id, day, None, false).unwrap();

    DeleteLogic::apply(&mut pool, id).unwrap();

    assert!(load_medication(&mut pool, id).unwrap().is_none());
    assert!(load_taken_for_date(&mut pool, &day).unwrap().is_empty());
    assert!(matches!(
        DeleteLogic::apply(&mut pool, id),
        Err(AppError::MedicationNotFound(_))
    ));

    let ops: Vec<String> = load_log(&mut pool)
        .unwrap()
        .into_iter()
        .map(|(_, _, op, _, _)| op)
        .filter(|op| op != "migration_applied")
        .collect();
    assert_eq!(ops, vec!["add", "take", "del"]);
}

fn insert_raw(pool: &DbPool, name: &str, frequency: &str, duration: &str) {
    pool.conn
        .execute(
            "INSERT INTO medications (name, dosage, category, frequency, start_time, start_date, duration, next_day_mode, created_at)
             VALUES (?1, '', 'general', ?2, '09:00', '2025-03-10', ?3, 'continue', '2025-03-01T08:00:00+00:00')",
            rusqlite::params![name, frequency, duration],
        )
        .unwrap();
}

#[test]
fn test_unreadable_schedule_columns_do_not_hide_other_medications() {
    let mut pool = pool();
    let good = AddLogic::apply(
        &mut pool,
        &record(0, "Losartan", "heart", daily_schedule("twice_daily", "08:00", "2025-03-10")),
    )
    .unwrap();
    insert_raw(&pool, "Mystery", "thrice_daily", "0");

    let summary = Core::load_daily_summary(&mut pool, date("2025-03-12")).unwrap();
    assert_eq!(summary.medications.len(), 2);

    let losartan = summary.medications.iter().find(|m| m.id == good).unwrap();
    assert_eq!(losartan.doses.len(), 2);

    let mystery = summary
        .medications
        .iter()
        .find(|m| m.name == "Mystery")
        .unwrap();
    assert_eq!(mystery.schedule.frequency, Frequency::OnceDaily);
    assert_eq!(mystery.schedule.duration, DurationDays::Ongoing);
    assert_eq!(mystery.doses.len(), 1);
    assert_eq!(mystery.doses[0].time, "09:00");
    assert_eq!(mystery.doses[0].label, DoseLabel::Daily);
}

#[test]
fn test_delete_keeps_other_medications_history() {
    let mut pool = pool();
    let keep = AddLogic::apply(
        &mut pool,
        &record(0, "Losartan", "heart", daily_schedule("twice_daily", "08:00", "2025-03-10")),
    )
    .unwrap();
    let gone = AddLogic::apply(
        &mut pool,
        &record(0, "Vitamin D", "general", daily_schedule("once_daily", "07:30", "2025-03-10")),
    )
    .unwrap();
    let day = date("2025-03-10");
    TakeLogic::apply(&mut pool, keep, day, None, false).unwrap();
    TakeLogic::apply(&mut pool, gone, day, None, false).unwrap();

    assert_eq!(delete_medication(&pool.conn, gone).unwrap(), 1);
    assert_eq!(delete_medication(&pool.conn, gone).unwrap(), 0);

    let taken = load_taken_for_date(&mut pool, &day).unwrap();
    assert_eq!(taken.get(&keep), Some(&vec![1]));
    assert!(!taken.contains_key(&gone));
}

#[test]
fn test_failed_audit_write_does_not_block_the_operation() {
    let mut pool = pool();
    pool.conn.execute_batch("DROP TABLE log;").unwrap();

    let id = AddLogic::apply(
        &mut pool,
        &record(0, "Losartan", "heart", daily_schedule("twice_daily", "08:00", "2025-03-10")),
    )
    .unwrap();

    assert!(load_medication(&mut pool, id).unwrap().is_some());
    assert!(load_log(&mut pool).is_err());
}
