use crate::core::calculator::{breaks, departure, lunch};
use crate::core::settings::TrackerSettings;
use crate::models::Millis;
use crate::models::daily_record::DailyRecord;
use crate::models::remaining::Remaining;
use crate::utils::time::{MS_PER_HOUR, MS_PER_MINUTE};

/// Signed time left before the adjusted departure, in milliseconds.
///
/// delta = departure - now + lunch (+ breaks when `deduct_breaks` is on).
/// Time spent at lunch pushes the deadline later by the same amount.
pub fn remaining_ms(record: &DailyRecord, now: Millis, settings: &TrackerSettings) -> Millis {
    let deadline = departure::expected_departure(record, settings.workday_ms);
    let lunch = lunch::lunch_duration(record, settings.default_lunch_ms);

    let breaks = if settings.deduct_breaks {
        breaks::total_break_ms(record, now)
    } else {
        0
    };

    deadline
        .saturating_sub(now)
        .saturating_add(lunch)
        .saturating_add(breaks)
}

/// Split the signed delta into overtime flag, whole hours and whole minutes.
/// Out-of-range instants saturate instead of overflowing.
pub fn compute_remaining(record: &DailyRecord, now: Millis, settings: &TrackerSettings) -> Remaining {
    let delta = remaining_ms(record, now, settings);
    let magnitude = delta.unsigned_abs();
    let hour = MS_PER_HOUR.unsigned_abs();
    let minute = MS_PER_MINUTE.unsigned_abs();

    Remaining {
        overtime: delta < 0,
        hours: i64::try_from(magnitude / hour).unwrap_or(i64::MAX),
        minutes: ((magnitude % hour) / minute) as i64,
    }
}
