//! Time utilities: parsing HH:MM input, epoch-millisecond conversions, clock formatting.

use crate::errors::{AppError, AppResult};
use crate::models::Millis;
use chrono::{DateTime, Local, NaiveDate};

pub const MS_PER_MINUTE: Millis = 60 * 1000;
pub const MS_PER_HOUR: Millis = 60 * MS_PER_MINUTE;

pub fn minutes_to_ms(mins: i64) -> Millis {
    mins * MS_PER_MINUTE
}

/// Parse a prompt answer in `HH:MM` form.
///
/// The input is split on `:` and the first two components are taken as hour
/// and minute; anything after the second component is ignored.
/// Blank input means "cancelled" and yields `Ok(None)`.
pub fn parse_hhmm(input: &str) -> AppResult<Option<(u32, u32)>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let invalid = || AppError::InvalidTime(trimmed.to_string());

    let mut parts = trimmed.split(':');
    let hour: u32 = parts
        .next()
        .and_then(|h| h.trim().parse().ok())
        .ok_or_else(invalid)?;
    let minute: u32 = parts
        .next()
        .and_then(|m| m.trim().parse().ok())
        .ok_or_else(invalid)?;

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(Some((hour, minute)))
}

/// Local instant of `hour:minute:00` on `date`, in epoch milliseconds.
pub fn instant_on(date: NaiveDate, hour: u32, minute: u32) -> AppResult<Millis> {
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| AppError::InvalidTime(format!("{:02}:{:02}", hour, minute)))?;

    // DST gaps have no local representation; ambiguous times take the earlier one
    let local = naive.and_local_timezone(Local).earliest().ok_or_else(|| {
        AppError::InvalidTime(format!(
            "{:02}:{:02} does not exist on {} in the local timezone",
            hour, minute, date
        ))
    })?;

    Ok(local.timestamp_millis())
}

/// Resolve an optional `HH:MM` argument against `date`.
/// `Ok(None)` when the argument is absent or blank.
pub fn parse_time_on(input: Option<&str>, date: NaiveDate) -> AppResult<Option<Millis>> {
    match input.map(parse_hhmm).transpose()?.flatten() {
        Some((h, m)) => Ok(Some(instant_on(date, h, m)?)),
        None => Ok(None),
    }
}

pub fn to_local(ms: Millis) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(ms).map(|utc| utc.with_timezone(&Local))
}

/// `HH:MM` in local time, `--:--` when absent.
pub fn format_clock(ms: Option<Millis>) -> String {
    ms.and_then(to_local)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// `HH:MM:SS` in local time, used for confirmation messages.
pub fn format_clock_secs(ms: Millis) -> String {
    to_local(ms)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}
