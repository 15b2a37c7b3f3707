// JSON messages exchanged with the dashboard page over the WebSocket.
//
// Every message is `{"type": "...", "payload": ...}`.

use serde::{Deserialize, Serialize};
use statline_baseball::dashboard::{DashboardOptions, DashboardUpdate, Selection};

/// Requests sent by the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    /// Ask for the control options (players, stats, season bounds).
    Options,
    /// Controls changed; recompute every panel.
    Update(Selection),
}

/// Replies sent to the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    Options(DashboardOptions),
    Dashboard(Box<DashboardUpdate>),
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use statline_baseball::filter::SeasonRange;

    #[test]
    fn parse_options_without_payload() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"OPTIONS"}"#).unwrap();
        assert_eq!(msg, ClientMessage::Options);
    }

    #[test]
    fn parse_update() {
        let json = r#"{
            "type": "UPDATE",
            "payload": {"player": "Juan Soto", "stats": ["OBP", "HR"], "seasons": {"min": 2021, "max": 2023}}
        }"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Update(Selection {
                player: Some("Juan Soto".into()),
                stats: vec!["OBP".into(), "HR".into()],
                seasons: Some(SeasonRange::new(2021, 2023)),
            })
        );
    }

    #[test]
    fn parse_update_with_empty_payload() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"UPDATE","payload":{}}"#).unwrap();
        assert_eq!(msg, ClientMessage::Update(Selection::default()));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"RESET"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>("not json").is_err());
    }

    #[test]
    fn error_serializes_with_message_payload() {
        let json = serde_json::to_value(ServerMessage::Error {
            message: "bad request".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "ERROR", "payload": {"message": "bad request"}})
        );
    }
}
