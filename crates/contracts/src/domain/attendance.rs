//! Attendance status of one employee for the current day.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceState {
    #[default]
    NotCheckedIn,
    CheckedIn,
    CheckedOut,
}

impl AttendanceState {
    /// Unknown values collapse to [`AttendanceState::NotCheckedIn`].
    pub fn parse(s: &str) -> Self {
        let normalized = s.trim().to_lowercase().replace(' ', "-");
        match normalized.as_str() {
            "checked-in" => AttendanceState::CheckedIn,
            "checked-out" => AttendanceState::CheckedOut,
            _ => AttendanceState::NotCheckedIn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceState::NotCheckedIn => "not-checked-in",
            AttendanceState::CheckedIn => "checked-in",
            AttendanceState::CheckedOut => "checked-out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceState::NotCheckedIn => "Not Checked In",
            AttendanceState::CheckedIn => "Checked In",
            AttendanceState::CheckedOut => "Checked Out",
        }
    }

    /// Inline color for the status label; empty clears it.
    pub fn color(&self) -> &'static str {
        match self {
            AttendanceState::NotCheckedIn => "",
            AttendanceState::CheckedIn => "green",
            AttendanceState::CheckedOut => "crimson",
        }
    }

    pub fn check_in_enabled(&self) -> bool {
        !matches!(self, AttendanceState::CheckedIn)
    }

    pub fn check_out_enabled(&self) -> bool {
        matches!(self, AttendanceState::CheckedIn)
    }
}

/// Text for the worked-hours cell, if there is anything to show.
pub fn hours_label(hours: Option<f32>) -> Option<String> {
    match hours {
        Some(h) if h > 0.0 => Some(format!("{} hrs", h)),
        _ => None,
    }
}
