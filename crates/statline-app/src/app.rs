// Request handling shared by the WebSocket and HTTP front ends.

use std::sync::Arc;

use statline_baseball::dashboard::Dashboard;
use statline_core::ws_server::MessageHandler;
use tracing::{error, warn};

use crate::protocol::{ClientMessage, ServerMessage};

/// Answers dashboard requests against one loaded table.
#[derive(Debug, Clone)]
pub struct DashboardService {
    dashboard: Arc<Dashboard>,
}

impl DashboardService {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        DashboardService { dashboard }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn respond(&self, msg: ClientMessage) -> ServerMessage {
        match msg {
            ClientMessage::Options => ServerMessage::Options(self.dashboard.options()),
            ClientMessage::Update(selection) => {
                ServerMessage::Dashboard(Box::new(self.dashboard.update(&selection)))
            }
        }
    }

    /// Parse one raw request and answer it. Unparseable input gets an
    /// `ERROR` reply rather than silence.
    pub fn handle_json(&self, json_str: &str) -> ServerMessage {
        match serde_json::from_str::<ClientMessage>(json_str) {
            Ok(msg) => self.respond(msg),
            Err(e) => {
                warn!("Failed to parse client message: {}", e);
                ServerMessage::Error {
                    message: format!("invalid request: {e}"),
                }
            }
        }
    }
}

impl MessageHandler for DashboardService {
    fn handle_text(&self, text: &str) -> Option<String> {
        match serde_json::to_string(&self.handle_json(text)) {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!("Failed to serialize reply: {}", e);
                None
            }
        }
    }
}
