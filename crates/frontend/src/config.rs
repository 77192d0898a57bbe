//! Page-level configuration.
//!
//! Defaults match the dashboard server. A page may override any field with a
//! JSON document:
//!
//! ```html
//! <script type="application/json" id="dashboard-config">
//!     { "csrf_cookie": "csrftoken", "duplicate_policy": "allow" }
//! </script>
//! ```

use crate::shared::dom::{DomNode, DomRoot};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// What to do when an action is triggered again for a record whose previous
/// request has not resolved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Drop the new request and keep the record's controls disabled.
    #[default]
    Ignore,
    /// Send every request.
    Allow,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub duplicate_policy: DuplicatePolicy,
    pub clock_interval_ms: u32,
    pub carousel_interval_ms: u32,
    pub slider_interval_ms: u32,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            duplicate_policy: DuplicatePolicy::Ignore,
            clock_interval_ms: 60_000,
            carousel_interval_ms: 6_000,
            slider_interval_ms: 3_000,
            log_level: "debug".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the page's config element, falling back to defaults when it is
    /// absent or unreadable.
    pub fn load<R: DomRoot>(root: &R) -> Self {
        let Some(element) = root.by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        match Self::from_json(&element.text()) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}
