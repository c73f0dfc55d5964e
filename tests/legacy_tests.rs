use serde_json::json;
use worktrack::core::legacy::{UpgradeReport, upgrade_all};
use worktrack::core::settings::TrackerSettings;
use worktrack::core::tracker::DailyTracker;
use worktrack::core::clock::FixedClock;
use worktrack::db::pool::DbPool;
use worktrack::db::initialize::init_db;
use worktrack::db::stats::{StoreCounts, count_values};
use worktrack::db::{KeyValueStore, MemoryStore};
use worktrack::models::break_interval::BreakInterval;
use worktrack::models::daily_record::DailyRecord;
use worktrack::models::stored_value::StoredValue;

mod common;
use common::{local_at, ms_at, test_day};

fn ready_pool() -> DbPool {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    pool
}

#[test]
fn record_serializes_in_camel_case_with_null_ends() {
    let mut record = DailyRecord::new(1_000);
    record.lunch_start = Some(2_000);
    record.breaks.push(BreakInterval::open(3_000));

    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value,
        json!({
            "arrival": 1_000,
            "departure": null,
            "lunchStart": 2_000,
            "lunchEnd": null,
            "breaks": [{ "start": 3_000, "end": null }]
        })
    );
}

#[test]
fn stored_values_are_told_apart() {
    assert_eq!(
        StoredValue::decode(&json!(1_750_000_000_000i64)),
        Some(StoredValue::Legacy(1_750_000_000_000))
    );

    let decoded = StoredValue::decode(&json!({ "arrival": 5 })).unwrap();
    assert!(!decoded.is_legacy());
    assert_eq!(decoded, StoredValue::Record(DailyRecord::new(5)));

    assert_eq!(StoredValue::decode(&json!("yesterday")), None);
}

#[test]
fn legacy_arrival_is_upgraded_on_first_access() {
    let mut store = MemoryStore::new();
    store.update("6/16/2025", &json!(ms_at(8, 10))).unwrap();
    store
        .update("6/16/2025-lunch-start", &json!(ms_at(12, 0)))
        .unwrap();
    store
        .update("6/16/2025-lunch-end", &json!(ms_at(12, 50)))
        .unwrap();

    let mut tracker = DailyTracker::new(
        store,
        FixedClock::new(local_at(14, 0)),
        TrackerSettings::default(),
    );

    let record = tracker.get_record(test_day()).unwrap();
    assert_eq!(record.arrival, ms_at(8, 10));
    assert_eq!(record.lunch_start, Some(ms_at(12, 0)));
    assert_eq!(record.lunch_end, Some(ms_at(12, 50)));

    let stored = tracker.store().get("6/16/2025").unwrap().unwrap();
    assert!(stored.is_object(), "the upgraded record must be persisted");
}

#[test]
fn peek_upgrades_in_memory_only() {
    let mut store = MemoryStore::new();
    store.update("6/16/2025", &json!(ms_at(8, 0))).unwrap();

    let tracker = DailyTracker::new(
        store,
        FixedClock::new(local_at(9, 0)),
        TrackerSettings::default(),
    );

    let record = tracker.peek_record(test_day()).unwrap().unwrap();
    assert_eq!(record.arrival, ms_at(8, 0));
    assert!(tracker.store().get("6/16/2025").unwrap().unwrap().is_number());
}

#[test]
fn bulk_upgrade_rewrites_legacy_days_only() {
    let mut store = MemoryStore::new();
    store.update("6/13/2025", &json!(ms_at(9, 0))).unwrap();
    store.update("6/13/2025-lunch-end", &json!(ms_at(13, 0))).unwrap();
    store
        .update("6/16/2025", &serde_json::to_value(DailyRecord::new(7)).unwrap())
        .unwrap();
    store.update("notes", &json!(["not", "a", "day"])).unwrap();

    let report = upgrade_all(&mut store).unwrap();

    assert_eq!(
        report,
        UpgradeReport {
            upgraded: vec!["6/13/2025".to_string()],
            skipped: vec!["notes".to_string()],
        }
    );

    let upgraded = store.get("6/13/2025").unwrap().unwrap();
    assert_eq!(upgraded["lunchEnd"], json!(ms_at(13, 0)));
    assert_eq!(upgraded["lunchStart"], json!(null));

    // lunch inputs stay where they were
    assert!(store.get("6/13/2025-lunch-end").unwrap().unwrap().is_number());

    // running it again finds nothing to do
    assert!(upgrade_all(&mut store).unwrap().upgraded.is_empty());
}

#[test]
fn sqlite_store_replaces_values_wholesale() {
    let mut pool = ready_pool();

    pool.update("6/16/2025", &json!({ "arrival": 1 })).unwrap();
    pool.update("6/16/2025", &json!({ "arrival": 2 })).unwrap();
    pool.update("6/15/2025", &json!(3)).unwrap();

    assert_eq!(pool.get("6/16/2025").unwrap(), Some(json!({ "arrival": 2 })));
    assert_eq!(pool.get("missing").unwrap(), None);
    assert_eq!(
        pool.keys().unwrap(),
        vec!["6/15/2025".to_string(), "6/16/2025".to_string()]
    );
}

#[test]
fn migrations_are_applied_once() {
    let pool = DbPool::in_memory().unwrap();

    assert_eq!(init_db(&pool.conn).unwrap().len(), 1);
    assert!(init_db(&pool.conn).unwrap().is_empty());
}

#[test]
fn sqlite_tracker_round_trip() {
    let mut tracker = DailyTracker::new(
        ready_pool(),
        FixedClock::new(local_at(9, 0)),
        TrackerSettings::default(),
    );

    tracker.start_break().unwrap();
    let record = tracker.get_record(test_day()).unwrap();
    tracker.save_record(test_day(), &record).unwrap();

    assert_eq!(tracker.get_record(test_day()).unwrap(), record);
    assert_eq!(record.breaks, vec![BreakInterval::open(ms_at(9, 0))]);
}

#[test]
fn store_counts_by_layout() {
    let mut pool = ready_pool();
    pool.update("6/12/2025", &json!(1)).unwrap();
    pool.update("6/12/2025-lunch-start", &json!(2)).unwrap();
    pool.update("6/13/2025", &json!({ "arrival": 3 })).unwrap();
    pool.update("junk", &json!(true)).unwrap();

    assert_eq!(
        count_values(&pool).unwrap(),
        StoreCounts {
            records: 1,
            legacy: 1,
            legacy_lunch: 1,
            unknown: 1,
        }
    );
}
