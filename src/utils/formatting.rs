//! Formatting utilities used for CLI outputs.

use crate::models::Millis;
use crate::utils::time::{MS_PER_HOUR, MS_PER_MINUTE};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Human readable duration, e.g. `01h 30m` or `-00h 15m`.
/// Sub-minute remainders are truncated.
pub fn ms2readable(ms: Millis, want_sign: bool) -> String {
    let abs_ms = ms.unsigned_abs();
    let hours = abs_ms / MS_PER_HOUR.unsigned_abs();
    let minutes = (abs_ms % MS_PER_HOUR.unsigned_abs()) / MS_PER_MINUTE.unsigned_abs();

    let sign = if ms > 0 && want_sign {
        "+"
    } else if ms < 0 {
        "-"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, hours, minutes)
}
