//! WebSocket message types: envelope, commands, and events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::FilterCriteria;
use crate::error::CatalogError;

/// Top-level WebSocket message envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsMessage {
    /// Client-provided ID for requests; server-generated for events.
    #[serde(default)]
    pub id: String,
    /// Message type discriminator.
    #[serde(rename = "type")]
    pub msg_type: WsMessageType,
    /// ISO-8601 timestamp. Optional on client messages.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    /// Variant-specific payload.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl WsMessage {
    /// Builds a server message stamped with the current time.
    #[must_use]
    pub fn new(id: String, msg_type: WsMessageType, payload: serde_json::Value) -> Self {
        Self {
            id,
            msg_type,
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Builds an error message answering request `id`.
    #[must_use]
    pub fn error(id: String, err: &CatalogError) -> Self {
        Self::new(
            id,
            WsMessageType::Error,
            serde_json::json!({
                "code": err.error_code(),
                "message": err.to_string(),
            }),
        )
    }

    /// Serializes the message; an empty string if that fails.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Discriminator for WebSocket message types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WsMessageType {
    /// Client → Server command.
    Command,
    /// Server → Client response to a command.
    Response,
    /// Server → Client listing update.
    Event,
    /// Server → Client error.
    Error,
}

/// Commands that a client can send over WebSocket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WsCommand {
    /// Replace the listing criteria. The listing returns to page 1.
    SetCriteria {
        /// New criteria (camelCase fields, `selectedYear` defaults to the
        /// current year).
        criteria: FilterCriteria,
    },
    /// Navigate to another page of the current result set.
    ChangePage {
        /// Requested 1-based page.
        page: usize,
        /// Revision of the listing the page was picked from. Requests for
        /// an older revision are ignored.
        #[serde(default)]
        revision: Option<u64>,
    },
    /// Re-fetch the catalog from the data source.
    Refresh,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Sport;

    #[test]
    fn parses_set_criteria_command() {
        let raw = r#"{"id":"1","type":"command","payload":{"command":"set_criteria",
            "criteria":{"searchTerm":"copa","selectedSports":["futbol"],"selectedYear":2025}}}"#;
        let Ok(msg) = serde_json::from_str::<WsMessage>(raw) else {
            panic!("envelope should parse");
        };
        let Ok(WsCommand::SetCriteria { criteria }) = serde_json::from_value(msg.payload) else {
            panic!("command should parse");
        };
        assert_eq!(criteria.search_term, "copa");
        assert!(criteria.selected_sports.contains(&Sport::Futbol));
        assert_eq!(criteria.selected_year, 2025);
    }

    #[test]
    fn parses_change_page_without_revision() {
        let payload = serde_json::json!({"command": "change_page", "page": 2});
        let Ok(cmd) = serde_json::from_value::<WsCommand>(payload) else {
            panic!("command should parse");
        };
        assert_eq!(
            cmd,
            WsCommand::ChangePage {
                page: 2,
                revision: None
            }
        );
    }

    #[test]
    fn error_message_carries_code() {
        let msg = WsMessage::error("9".to_string(), &CatalogError::Internal("x".to_string()));
        assert_eq!(msg.msg_type, WsMessageType::Error);
        assert_eq!(
            msg.payload.get("code").and_then(serde_json::Value::as_u64),
            Some(3000)
        );
    }
}
