mod common;
use common::times;
use rdoseplan::core::calculator::dose_times::{calculate_dose_times, last_dose_time};
use rdoseplan::models::dose::DoseLabel;
use rdoseplan::models::frequency::Frequency;

#[test]
fn test_once_daily_is_a_single_daily_dose() {
    let doses = calculate_dose_times("07:45", &Frequency::OnceDaily);
    assert_eq!(doses.len(), 1);
    assert_eq!(doses[0].time, "07:45");
    assert_eq!(doses[0].label, DoseLabel::Daily);
    assert_eq!(doses[0].ordinal, 1);
    assert!(!doses[0].taken);
}

#[test]
fn test_single_dose_frequencies_share_the_daily_layout() {
    for freq in [Frequency::EveryOtherDay, Frequency::Weekly, Frequency::AsNeeded] {
        let doses = calculate_dose_times("21:00", &freq);
        assert_eq!(times(&doses), vec!["21:00"], "{freq}");
        assert_eq!(doses[0].label, DoseLabel::Daily);
    }
}

#[test]
fn test_twice_daily_from_eight() {
    let doses = calculate_dose_times("08:00", &Frequency::TwiceDaily);
    assert_eq!(times(&doses), vec!["08:00", "20:00"]);
    assert_eq!(doses[0].label, DoseLabel::Morning);
    assert_eq!(doses[1].label, DoseLabel::Midday);
    assert_eq!(
        doses.iter().map(|d| d.ordinal).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn test_four_times_daily_stops_before_midnight() {
    let doses = calculate_dose_times("08:00", &Frequency::FourTimesDaily);
    assert_eq!(times(&doses), vec!["08:00", "14:00", "20:00"]);
    assert_eq!(doses[2].label, DoseLabel::Afternoon);
}

#[test]
fn test_four_times_daily_from_midnight_fills_the_day() {
    let doses = calculate_dose_times("00:00", &Frequency::FourTimesDaily);
    assert_eq!(times(&doses), vec!["00:00", "06:00", "12:00", "18:00"]);
    assert_eq!(doses[3].label, DoseLabel::Evening);
}

#[test]
fn test_three_times_daily_depends_on_start() {
    let early = calculate_dose_times("06:00", &Frequency::ThreeTimesDaily);
    assert_eq!(times(&early), vec!["06:00", "14:00", "22:00"]);

    let late = calculate_dose_times("09:00", &Frequency::ThreeTimesDaily);
    assert_eq!(times(&late), vec!["09:00", "17:00"]);
}

#[test]
fn test_custom_interval_is_capped_at_four_doses() {
    let doses = calculate_dose_times("06:00", &Frequency::Custom { interval_hours: 2 });
    assert_eq!(times(&doses), vec!["06:00", "08:00", "10:00", "12:00"]);
}

#[test]
fn test_custom_zero_interval_uses_default() {
    let doses = calculate_dose_times("00:00", &Frequency::Custom { interval_hours: 0 });
    assert_eq!(times(&doses), vec!["00:00", "08:00", "16:00"]);
}

#[test]
fn test_custom_interval_longer_than_a_day_gives_one_dose() {
    let doses = calculate_dose_times("10:00", &Frequency::Custom { interval_hours: 36 });
    assert_eq!(times(&doses), vec!["10:00"]);
    assert_eq!(doses[0].label, DoseLabel::Morning);
}

#[test]
fn test_malformed_start_anchors_at_midnight() {
    let doses = calculate_dose_times("nope", &Frequency::TwiceDaily);
    assert_eq!(times(&doses), vec!["00:00", "12:00"]);
}

#[test]
fn test_twelve_hour_start_is_accepted() {
    let doses = calculate_dose_times("8:00 PM", &Frequency::TwiceDaily);
    assert_eq!(times(&doses), vec!["20:00"]);
}

#[test]
fn test_last_dose_time() {
    let doses = calculate_dose_times("08:00", &Frequency::TwiceDaily);
    assert_eq!(last_dose_time(&doses), Some("20:00"));
    assert_eq!(last_dose_time(&[]), None);
}

#[test]
fn test_frequency_codes_parse_back() {
    for code in [
        "once_daily",
        "twice_daily",
        "three_times_daily",
        "four_times_daily",
        "every_other_day",
        "weekly",
        "as_needed",
        "custom:6",
    ] {
        let f: Frequency = code.parse().unwrap();
        assert_eq!(f.to_string(), code);
    }
    assert_eq!(
        "custom:12h".parse::<Frequency>().unwrap(),
        Frequency::Custom { interval_hours: 12 }
    );
    assert!("hourly".parse::<Frequency>().is_err());
    assert_eq!(Frequency::Custom { interval_hours: 0 }.describe(), "every 8h");
}
