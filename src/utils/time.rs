//! Time utilities: wall clock at second precision, hour arithmetic.

use chrono::{Local, NaiveDateTime, Timelike};

/// Current local time, truncated to whole seconds (the ledger stores seconds).
pub fn now() -> NaiveDateTime {
    let n = Local::now().naive_local();
    n.with_nanosecond(0).unwrap_or(n)
}

/// Fractional hours between two timestamps (negative if `end < start`).
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Truncate a string to at most `max` characters, never splitting a char.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
