use crate::models::Millis;
use crate::models::daily_record::DailyRecord;

/// Lunch = end - start when both are known, otherwise the configured default.
///
/// An end before the start yields a negative duration; it is not clamped.
/// Ad-hoc breaks are not part of the lunch.
pub fn lunch_duration(record: &DailyRecord, default_ms: Millis) -> Millis {
    match (record.lunch_start, record.lunch_end) {
        (Some(start), Some(end)) => end.saturating_sub(start),
        _ => default_ms,
    }
}
