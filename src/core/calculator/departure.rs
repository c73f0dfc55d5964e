use crate::models::Millis;
use crate::models::daily_record::DailyRecord;

/// Nominal end of day: arrival + workday length.
pub fn expected_departure(record: &DailyRecord, workday_ms: Millis) -> Millis {
    record.arrival.saturating_add(workday_ms)
}
