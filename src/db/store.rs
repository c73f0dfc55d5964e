//! Key/value persistence for daily records.
//!
//! Keys are calendar-date strings, values are opaque JSON documents.
//! `update` always replaces the whole value: last writer wins.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use serde_json::Value;
use std::collections::BTreeMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>>;

    fn update(&mut self, key: &str, value: &Value) -> AppResult<()>;

    /// All keys currently stored, in ascending order.
    fn keys(&self) -> AppResult<Vec<String>>;
}

impl KeyValueStore for DbPool {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn update(&mut self, key: &str, value: &Value) -> AppResult<()> {
        let text = serde_json::to_string(value)?;
        let now = Local::now().to_rfc3339();

        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![key, text, now])?;

        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT key FROM kv_store ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

/// Process-local store, handy for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn update(&mut self, key: &str, value: &Value) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}
