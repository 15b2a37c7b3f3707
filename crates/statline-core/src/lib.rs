// Shared plumbing for the statline workspace: configuration, logging and the
// WebSocket transport.

pub mod config;
pub mod logging;
pub mod ws_server;
