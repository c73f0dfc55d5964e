use crate::models::Millis;
use crate::models::daily_record::DailyRecord;

/// Sum of all ad-hoc breaks; open breaks count up to `now`.
pub fn total_break_ms(record: &DailyRecord, now: Millis) -> Millis {
    record
        .breaks
        .iter()
        .map(|b| b.duration_until(now))
        .fold(0, Millis::saturating_add)
}
