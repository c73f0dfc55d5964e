//! Upgrade of the pre-record storage layout.
//!
//! Old releases kept the arrival as a bare number under the date key and the
//! lunch instants as bare numbers under `<date key>-lunch-start` and
//! `<date key>-lunch-end`. The structured `DailyRecord` is the only layout
//! written today; old values are folded into it before first use.

use crate::db::store::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::Millis;
use crate::models::daily_record::DailyRecord;
use crate::models::stored_value::StoredValue;

pub const LUNCH_START_SUFFIX: &str = "-lunch-start";
pub const LUNCH_END_SUFFIX: &str = "-lunch-end";

/// Keys holding legacy lunch instants; they feed an upgrade but are not records.
pub fn is_legacy_lunch_key(key: &str) -> bool {
    key.ends_with(LUNCH_START_SUFFIX) || key.ends_with(LUNCH_END_SUFFIX)
}

fn legacy_number<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> AppResult<Option<Millis>> {
    Ok(store.get(key)?.and_then(|v| v.as_i64()))
}

/// Build the structured record equivalent to a legacy arrival stored under `key`.
pub fn upgrade_legacy<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    arrival: Millis,
) -> AppResult<DailyRecord> {
    let mut record = DailyRecord::new(arrival);
    record.lunch_start = legacy_number(store, &format!("{key}{LUNCH_START_SUFFIX}"))?;
    record.lunch_end = legacy_number(store, &format!("{key}{LUNCH_END_SUFFIX}"))?;
    Ok(record)
}

/// Decode whatever is stored under `key` into a record, without writing.
/// The flag tells whether the value was in the legacy layout.
pub fn decode_record<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> AppResult<Option<(DailyRecord, bool)>> {
    let Some(value) = store.get(key)? else {
        return Ok(None);
    };

    match StoredValue::decode(&value) {
        Some(StoredValue::Record(record)) => Ok(Some((record, false))),
        Some(StoredValue::Legacy(arrival)) => Ok(Some((upgrade_legacy(store, key, arrival)?, true))),
        None => Err(AppError::CorruptRecord(key.to_string())),
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpgradeReport {
    pub upgraded: Vec<String>,
    pub skipped: Vec<String>,
}

/// Rewrite every legacy date key in the structured layout.
///
/// Values matching neither layout are reported as skipped and left untouched.
pub fn upgrade_all<S: KeyValueStore + ?Sized>(store: &mut S) -> AppResult<UpgradeReport> {
    let mut report = UpgradeReport::default();

    for key in store.keys()? {
        if is_legacy_lunch_key(&key) {
            continue;
        }

        match decode_record(&*store, &key) {
            Ok(Some((record, true))) => {
                store.update(&key, &serde_json::to_value(&record)?)?;
                report.upgraded.push(key);
            }
            Ok(_) => {}
            Err(AppError::CorruptRecord(k)) => report.skipped.push(k),
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
