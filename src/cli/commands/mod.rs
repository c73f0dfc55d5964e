pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod menu;
pub mod show;
pub mod status;
pub mod track;
pub mod watch;

use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::settings::TrackerSettings;
use crate::core::tracker::DailyTracker;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Tracker as used by the command line: SQLite store, wall clock.
pub type CliTracker = DailyTracker<DbPool, SystemClock>;

pub fn open_tracker(cfg: &Config) -> AppResult<CliTracker> {
    let settings = TrackerSettings::from_config(cfg)?;

    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::open_ready(&cfg.database)?;
    Ok(DailyTracker::new(pool, SystemClock, settings))
}
