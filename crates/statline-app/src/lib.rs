// Statline binary support: request handling, wire protocol, HTTP routes and
// command-line arguments.

pub mod app;
pub mod cli;
pub mod http;
pub mod protocol;
