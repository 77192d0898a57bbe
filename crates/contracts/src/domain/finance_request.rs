//! Wire types for remote record actions (approve/reject and similar).

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Action failed.";
pub const NETWORK_FAILURE: &str = "Network error. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    #[default]
    Post,
    Put,
    Delete,
}

impl HttpVerb {
    /// Parse a `data-method` attribute; anything unknown is a POST.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "PUT" => HttpVerb::Put,
            "DELETE" => HttpVerb::Delete,
            _ => HttpVerb::Post,
        }
    }
}

/// A pending mutation of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub record_id: String,
    pub endpoint: String,
    pub verb: HttpVerb,
}

impl ActionRequest {
    pub fn post(record_id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            endpoint: endpoint.into(),
            verb: HttpVerb::Post,
        }
    }
}

/// Body returned by an action endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unreadable response: {0}")]
    Malformed(String),
    #[error("rejected by server: {0:?}")]
    Rejected(Option<String>),
}

impl ActionError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Transport(_) | ActionError::Malformed(_) => NETWORK_FAILURE.to_string(),
            ActionError::Rejected(Some(message)) if !message.trim().is_empty() => message.clone(),
            ActionError::Rejected(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

impl ActionResponse {
    /// Parse a response body and reduce it to the confirmed status.
    pub fn confirmed_status(body: &str) -> Result<String, ActionError> {
        let response: ActionResponse =
            serde_json::from_str(body).map_err(|e| ActionError::Malformed(e.to_string()))?;
        response.into_status()
    }

    pub fn into_status(self) -> Result<String, ActionError> {
        if !self.success {
            return Err(ActionError::Rejected(self.error));
        }
        match self.status {
            Some(status) if !status.trim().is_empty() => Ok(status),
            _ => Err(ActionError::Rejected(None)),
        }
    }
}

/// Class list for a status badge, e.g. `badge status-approved`.
pub fn badge_class(status: &str) -> String {
    format!("badge status-{}", status.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        let status = ActionResponse::confirmed_status(r#"{"success":true,"status":"Approved"}"#);
        assert_eq!(status, Ok("Approved".to_string()));
    }

    #[test]
    fn test_rejected_body_uses_server_message() {
        let err = ActionResponse::confirmed_status(r#"{"success":false,"error":"Already processed"}"#)
            .unwrap_err();
        assert_eq!(err.user_message(), "Already processed");
    }

    #[test]
    fn test_rejected_body_without_message() {
        let err = ActionResponse::confirmed_status(r#"{"success":false}"#).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_success_without_status_is_a_failure() {
        let err = ActionResponse::confirmed_status(r#"{"success":true}"#).unwrap_err();
        assert_eq!(err, ActionError::Rejected(None));
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_non_json_body_reads_as_network_failure() {
        let err = ActionResponse::confirmed_status("<html>Forbidden</html>").unwrap_err();
        assert!(matches!(err, ActionError::Malformed(_)));
        assert_eq!(err.user_message(), NETWORK_FAILURE);
    }

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class("Approved"), "badge status-approved");
        assert_eq!(badge_class("On Hold"), "badge status-on hold");
    }

    #[test]
    fn test_verb_parse() {
        assert_eq!(HttpVerb::parse("delete"), HttpVerb::Delete);
        assert_eq!(HttpVerb::parse(""), HttpVerb::Post);
    }
}
