use crate::core::legacy::is_legacy_lunch_key;
use crate::db::pool::DbPool;
use crate::db::store::KeyValueStore;
use crate::errors::AppResult;
use crate::models::stored_value::StoredValue;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub records: usize,
    pub legacy: usize,
    pub legacy_lunch: usize,
    pub unknown: usize,
}

/// Classify every stored value by layout.
pub fn count_values<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<StoreCounts> {
    let mut counts = StoreCounts::default();

    for key in store.keys()? {
        if is_legacy_lunch_key(&key) {
            counts.legacy_lunch += 1;
            continue;
        }

        match store.get(&key)?.as_ref().and_then(StoredValue::decode) {
            Some(StoredValue::Record(_)) => counts.records += 1,
            Some(StoredValue::Legacy(_)) => counts.legacy += 1,
            None => counts.unknown += 1,
        }
    }

    Ok(counts)
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) VALUES BY LAYOUT
    //
    let counts = count_values(pool)?;
    println!(
        "{}• Daily records:{} {}{}{}",
        CYAN, RESET, GREEN, counts.records, RESET
    );
    println!(
        "{}• Legacy values:{} {} arrival(s), {} lunch instant(s)",
        CYAN, RESET, counts.legacy, counts.legacy_lunch
    );
    if counts.unknown > 0 {
        println!(
            "{}• Unrecognized values:{} {}{}{}",
            CYAN, RESET, YELLOW, counts.unknown, RESET
        );
    }

    //
    // 3) LAST WRITE
    //
    let last_update: Option<String> = pool
        .conn
        .query_row(
            "SELECT updated_at FROM kv_store ORDER BY updated_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!(
        "{}• Last update:{} {}",
        CYAN,
        RESET,
        last_update.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    Ok(())
}
