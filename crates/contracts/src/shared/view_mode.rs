//! Which of the two presentations of a record set is on screen.

use serde::{Deserialize, Serialize};

/// Active presentation of a page's record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Card,
    Table,
}

impl ViewMode {
    /// Value written to the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Card => "card",
            ViewMode::Table => "table",
        }
    }

    /// Parse a stored value. Unknown values are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "card" => Some(ViewMode::Card),
            "table" => Some(ViewMode::Table),
            _ => None,
        }
    }

    /// Restore from an optional stored value, falling back to cards.
    pub fn restore(stored: Option<&str>) -> Self {
        stored.and_then(Self::parse).unwrap_or_default()
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Card => ViewMode::Table,
            ViewMode::Table => ViewMode::Card,
        }
    }

    /// Label for a single toggle button while this mode is active.
    pub fn switch_label(&self) -> &'static str {
        match self {
            ViewMode::Card => "Switch to Table View",
            ViewMode::Table => "Switch to Card View",
        }
    }

    /// Icon class shown next to [`ViewMode::switch_label`].
    pub fn switch_icon(&self) -> &'static str {
        match self {
            ViewMode::Card => "fas fa-th-list",
            ViewMode::Table => "fas fa-th-large",
        }
    }
}
