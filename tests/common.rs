#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate};
use std::env;
use std::fs;
use std::path::PathBuf;
use worktrack::core::clock::FixedClock;
use worktrack::core::settings::TrackerSettings;
use worktrack::core::tracker::DailyTracker;
use worktrack::db::MemoryStore;
use worktrack::models::Millis;

/// Binary under test, with HOME/APPDATA pointed at a scratch directory so a
/// real user configuration never leaks into the tests.
pub fn wt() -> Command {
    let home = env::temp_dir().join("worktrack_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("worktrack");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worktrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// A mid-June Monday, far from any DST switch.
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
}

pub fn local_at(hour: u32, minute: u32) -> DateTime<Local> {
    test_day()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_local_timezone(Local)
        .earliest()
        .unwrap()
}

pub fn ms_at(hour: u32, minute: u32) -> Millis {
    local_at(hour, minute).timestamp_millis()
}

pub fn tracker_at(
    hour: u32,
    minute: u32,
    settings: TrackerSettings,
) -> DailyTracker<MemoryStore, FixedClock> {
    DailyTracker::new(
        MemoryStore::new(),
        FixedClock::new(local_at(hour, minute)),
        settings,
    )
}
