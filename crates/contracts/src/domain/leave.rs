//! Leave request arithmetic: working days taken and the resumption date.
//!
//! Sundays are not counted as leave days and are never a resumption day.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummary {
    pub days: u32,
    pub resumption: NaiveDate,
}

impl LeaveSummary {
    /// Summarise the inclusive range `start..=end`. `None` when `end < start`.
    pub fn compute(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if end < start {
            return None;
        }

        let days = start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| day.weekday() != Weekday::Sun)
            .count() as u32;

        let mut resumption = end + Duration::days(1);
        if resumption.weekday() == Weekday::Sun {
            resumption += Duration::days(1);
        }

        Some(Self { days, resumption })
    }

    /// Parse two `<input type="date">` values and summarise them.
    pub fn from_inputs(start: &str, end: &str) -> Option<Self> {
        let start = parse_input_date(start)?;
        let end = parse_input_date(end)?;
        Self::compute(start, end)
    }

    /// e.g. "5 Days"
    pub fn days_label(&self) -> String {
        format!("{} Days", self.days)
    }

    /// e.g. "Oct 21, 2026"
    pub fn resumption_label(&self) -> String {
        self.resumption.format("%b %-d, %Y").to_string()
    }
}

fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
