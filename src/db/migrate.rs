use rusqlite::{Connection, OptionalExtension, Result};

const KV_STORE_MIGRATION: &str = "20250601_0001_create_kv_store";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the key/value table holding one JSON document per key.
fn create_kv_store_table(conn: &Connection) -> Result<bool> {
    if is_applied(conn, KV_STORE_MIGRATION)? {
        return Ok(false);
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, KV_STORE_MIGRATION, "Created kv_store table")?;
    Ok(true)
}

/// Public entry point: run all pending schema migrations.
///
/// Invocata da db::init_db(). Returns the versions applied by this call,
/// so callers decide whether to tell the user about them.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    let mut applied = Vec::new();

    // 1) Ensure log table (migration bookkeeping lives there)
    ensure_log_table(conn)?;

    // 2) Key/value store
    if create_kv_store_table(conn)? {
        applied.push(KV_STORE_MIGRATION);
    }

    Ok(applied)
}
