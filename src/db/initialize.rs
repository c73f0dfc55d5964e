use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine and
/// returns the ids of the migrations applied by this call.
pub fn init_db(conn: &Connection) -> AppResult<Vec<&'static str>> {
    Ok(run_pending_migrations(conn)?)
}
