use worktrack::core::calculator::breaks::total_break_ms;
use worktrack::core::calculator::departure::expected_departure;
use worktrack::core::calculator::lunch::lunch_duration;
use worktrack::core::calculator::remaining::{compute_remaining, remaining_ms};
use worktrack::core::settings::TrackerSettings;
use worktrack::models::break_interval::BreakInterval;
use worktrack::models::daily_record::DailyRecord;
use worktrack::models::remaining::Remaining;

mod common;
use common::ms_at;

const HOUR: i64 = 3_600_000;
const MINUTE: i64 = 60_000;

#[test]
fn lunch_is_end_minus_start_when_both_are_set() {
    let mut record = DailyRecord::new(ms_at(9, 0));
    record.lunch_start = Some(ms_at(12, 0));
    record.lunch_end = Some(ms_at(12, 45));

    assert_eq!(lunch_duration(&record, HOUR), 45 * MINUTE);
}

#[test]
fn lunch_defaults_to_one_hour_when_a_bound_is_missing() {
    let mut record = DailyRecord::new(ms_at(9, 0));
    assert_eq!(lunch_duration(&record, HOUR), 3_600_000);

    record.lunch_start = Some(ms_at(12, 0));
    assert_eq!(lunch_duration(&record, HOUR), 3_600_000);

    record.lunch_start = None;
    record.lunch_end = Some(ms_at(13, 0));
    assert_eq!(lunch_duration(&record, HOUR), 3_600_000);
}

#[test]
fn lunch_ending_before_it_starts_is_negative() {
    let mut record = DailyRecord::new(ms_at(9, 0));
    record.lunch_start = Some(ms_at(13, 0));
    record.lunch_end = Some(ms_at(12, 30));

    assert_eq!(lunch_duration(&record, HOUR), -30 * MINUTE);
}

#[test]
fn departure_is_arrival_plus_seven_hours() {
    let record = DailyRecord::new(ms_at(8, 17));
    let settings = TrackerSettings::default();

    assert_eq!(
        expected_departure(&record, settings.workday_ms),
        record.arrival + 25_200_000
    );
}

#[test]
fn full_day_left_right_after_arrival() {
    let record = DailyRecord::new(ms_at(9, 0));
    let r = compute_remaining(&record, ms_at(9, 0), &TrackerSettings::default());

    assert_eq!(
        r,
        Remaining {
            overtime: false,
            hours: 8,
            minutes: 0
        }
    );
    assert_eq!(r.to_string(), "8 hrs 0 mins");
}

#[test]
fn short_lunch_brings_departure_forward() {
    let mut record = DailyRecord::new(ms_at(8, 0));
    record.lunch_start = Some(ms_at(12, 0));
    record.lunch_end = Some(ms_at(12, 30));

    let r = compute_remaining(&record, ms_at(15, 0), &TrackerSettings::default());

    assert!(!r.overtime);
    assert_eq!((r.hours, r.minutes), (0, 30));
}

#[test]
fn overtime_starts_strictly_after_adjusted_departure() {
    let settings = TrackerSettings::default();
    let record = DailyRecord::new(ms_at(9, 0));
    let limit = expected_departure(&record, settings.workday_ms)
        + lunch_duration(&record, settings.default_lunch_ms);

    let at_limit = compute_remaining(&record, limit, &settings);
    assert!(!at_limit.overtime);
    assert_eq!(at_limit.sign(), "");
    assert_eq!((at_limit.hours, at_limit.minutes), (0, 0));

    let just_before = compute_remaining(&record, limit - 1, &settings);
    assert!(!just_before.overtime);

    let just_after = compute_remaining(&record, limit + 1, &settings);
    assert!(just_after.overtime);
    assert_eq!(just_after.sign(), "+");
}

#[test]
fn overtime_is_rendered_with_a_plus_sign() {
    let record = DailyRecord::new(ms_at(8, 0));
    // adjusted departure is 16:00
    let r = compute_remaining(&record, ms_at(17, 15), &TrackerSettings::default());

    assert_eq!(r.to_string(), "+1 hrs 15 mins");
}

#[test]
fn partial_minutes_are_truncated() {
    let record = DailyRecord::new(ms_at(9, 0));
    let now = ms_at(9, 0) + 30 * 1000; // 30 seconds later

    let r = compute_remaining(&record, now, &TrackerSettings::default());
    assert_eq!((r.hours, r.minutes), (7, 59));
}

#[test]
fn breaks_are_ignored_unless_deduction_is_enabled() {
    let mut record = DailyRecord::new(ms_at(9, 0));
    record.breaks.push(BreakInterval {
        start: ms_at(10, 0),
        end: Some(ms_at(10, 15)),
    });

    let plain = TrackerSettings::default();
    let deducting = TrackerSettings {
        deduct_breaks: true,
        ..TrackerSettings::default()
    };
    let now = ms_at(11, 0);

    assert_eq!(
        remaining_ms(&record, now, &deducting) - remaining_ms(&record, now, &plain),
        15 * MINUTE
    );
}

#[test]
fn open_break_counts_until_now() {
    let mut record = DailyRecord::new(ms_at(9, 0));
    record.breaks.push(BreakInterval {
        start: ms_at(10, 0),
        end: Some(ms_at(10, 10)),
    });
    record.breaks.push(BreakInterval::open(ms_at(11, 0)));

    assert_eq!(total_break_ms(&record, ms_at(11, 20)), 30 * MINUTE);
}

#[test]
fn out_of_range_arrival_saturates_instead_of_overflowing() {
    let record: DailyRecord = serde_json::from_str(r#"{"arrival":9223372036854775000}"#).unwrap();
    let settings = TrackerSettings::default();

    assert_eq!(expected_departure(&record, settings.workday_ms), i64::MAX);
    assert_eq!(remaining_ms(&record, 0, &settings), i64::MAX);

    let remaining = compute_remaining(&record, 0, &settings);
    assert!(!remaining.overtime);
    assert_eq!(remaining.hours, i64::MAX / HOUR);
}

#[test]
fn far_past_arrival_reports_overtime_without_overflowing() {
    let record = DailyRecord::new(i64::MIN);
    let remaining = compute_remaining(&record, i64::MAX, &TrackerSettings::default());

    assert!(remaining.overtime);
    assert!(remaining.hours > 0);
}
