//! Utilities for date and time formatting
//!
//! Provides the header clock and chat timestamp formats

use chrono::{Local, NaiveDateTime};

/// Format a timestamp as a short date
/// Example: 2026-10-19 15:04 -> "Oct 19, 2026"
pub fn format_clock_date(now: NaiveDateTime) -> String {
    now.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as 12-hour time
/// Example: 2026-10-19 15:04 -> "03:04 PM"
pub fn format_clock_time(now: NaiveDateTime) -> String {
    now.format("%I:%M %p").to_string()
}

/// Current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
