mod common;
use common::daily_schedule;
use rdoseplan::core::calculator::aggregator::aggregate;
use rdoseplan::core::calculator::dose_times::calculate_dose_times;
use rdoseplan::models::dose::DoseLabel;
use rdoseplan::models::medication::MedicationInstance;

const START: &str = "2025-03-10";

/// Instance with the doses of `freq` from `at`, marking `taken` ordinals.
fn instance(id: i64, name: &str, freq: &str, at: &str, taken: &[u32]) -> MedicationInstance {
    let schedule = daily_schedule(freq, at, START);
    let mut doses = calculate_dose_times(&schedule.start_time, &schedule.frequency);
    for d in &mut doses {
        d.taken = taken.contains(&d.ordinal);
    }
    MedicationInstance::new(id, name, schedule, doses)
}

fn mixed_day() -> Vec<MedicationInstance> {
    vec![
        instance(1, "Losartan", "twice_daily", "08:00", &[1]),
        MedicationInstance::single_dose(2, "Vitamin D", daily_schedule("once_daily", "07:30", START), false),
        instance(3, "Ibuprofen", "custom:6", "12:00", &[1]),
    ]
}

#[test]
fn test_totals_count_doses_not_medications() {
    let status = aggregate(&mixed_day());
    assert_eq!(status.totals.total_doses, 5);
    assert_eq!(status.totals.taken_doses, 2);
    assert_eq!(status.totals.pending_doses(), 3);
    assert_eq!(status.totals.adherence_percent(), 40);
}

#[test]
fn test_pending_sorted_by_time_and_next_is_earliest() {
    let status = aggregate(&mixed_day());
    let pending: Vec<(&str, &str)> = status
        .pending
        .iter()
        .map(|p| (p.medication_name.as_str(), p.time.as_str()))
        .collect();
    assert_eq!(
        pending,
        vec![
            ("Vitamin D", "07:30"),
            ("Ibuprofen", "18:00"),
            ("Losartan", "20:00")
        ]
    );

    let next = status.next.as_ref().expect("a pending dose");
    assert_eq!(next.medication_id, 2);
    assert_eq!(next.label, DoseLabel::Daily);
    assert_eq!(status.pending_medications(), 3);
}

#[test]
fn test_same_time_ties_break_by_name_ignoring_case() {
    let meds = vec![
        instance(1, "Zoloft", "once_daily", "08:00", &[]),
        instance(2, "aspirin", "once_daily", "08:00", &[]),
        instance(3, "Metformin", "once_daily", "08:00", &[]),
    ];
    let names: Vec<String> = aggregate(&meds)
        .pending
        .into_iter()
        .map(|p| p.medication_name)
        .collect();
    assert_eq!(names, vec!["aspirin", "Metformin", "Zoloft"]);
}

#[test]
fn test_all_taken() {
    let meds = vec![
        instance(1, "Losartan", "twice_daily", "08:00", &[1, 2]),
        MedicationInstance::single_dose(2, "Vitamin D", daily_schedule("once_daily", "07:30", START), true),
    ];
    let status = aggregate(&meds);
    assert!(status.all_taken());
    assert!(!status.is_empty());
    assert!(status.pending.is_empty());
    assert!(status.next.is_none());
    assert_eq!(status.totals.total_doses, 3);
    assert_eq!(status.totals.adherence_percent(), 100);
    assert!(meds.iter().all(MedicationInstance::is_complete));
}

#[test]
fn test_nothing_scheduled() {
    let status = aggregate(&[]);
    assert!(status.is_empty());
    assert!(!status.all_taken());
    assert!(status.next.is_none());
    assert_eq!(status.totals.adherence_percent(), 0);
}

#[test]
fn test_legacy_single_dose_counts_once() {
    let med = MedicationInstance::single_dose(
        9,
        "Melatonin",
        daily_schedule("once_daily", "10:00 PM", START),
        false,
    );
    assert_eq!(med.dose_count(), 1);
    assert_eq!(med.taken_count(), 0);

    let status = aggregate(&[med]);
    assert_eq!(status.totals.total_doses, 1);
    let next = status.next.expect("pending");
    assert_eq!(next.time, "22:00");
    assert_eq!(next.ordinal, 1);
}
