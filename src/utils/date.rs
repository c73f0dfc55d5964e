use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Reject strftime patterns that cannot render a bare calendar date,
/// including well-formed time or zone fields such as `%H` or `%z`.
pub fn validate_key_format(fmt: &str) -> AppResult<()> {
    if fmt.trim().is_empty() {
        return Err(AppError::Config("date_key_format cannot be empty".into()));
    }

    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::Config(format!(
            "date_key_format '{}' is not a valid strftime pattern",
            fmt
        )));
    }

    let sample = NaiveDate::from_ymd_opt(2000, 1, 1)
        .ok_or_else(|| AppError::Other("invalid sample date".into()))?;
    date_key(sample, fmt).map(|_| ())
}

/// Storage key of a calendar day.
pub fn date_key(date: NaiveDate, fmt: &str) -> AppResult<String> {
    let mut key = String::new();
    write!(key, "{}", date.format(fmt)).map_err(|_| {
        AppError::Config(format!(
            "date_key_format '{}' cannot format a calendar date",
            fmt
        ))
    })?;
    Ok(key)
}
