// HTTP front end: the dashboard page plus a small JSON API.

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use statline_baseball::dashboard::{DashboardOptions, DashboardUpdate, Selection};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app::DashboardService;

const INDEX_HTML: &str = include_str!("../assets/index.html");
/// Replaced in the page with the WebSocket port.
const WS_PORT_PLACEHOLDER: &str = "__STATLINE_WS_PORT__";

#[derive(Clone)]
pub struct HttpState {
    pub service: DashboardService,
    pub ws_port: u16,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub rows: usize,
    pub started_at: DateTime<Utc>,
}

pub fn router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/options", get(options))
        .route("/api/dashboard", post(dashboard))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// The page with its WebSocket port filled in.
pub fn render_index(ws_port: u16) -> String {
    INDEX_HTML.replace(WS_PORT_PLACEHOLDER, &ws_port.to_string())
}

async fn index(State(state): State<HttpState>) -> Html<String> {
    Html(render_index(state.ws_port))
}

async fn options(State(state): State<HttpState>) -> Json<DashboardOptions> {
    Json(state.service.dashboard().options())
}

async fn dashboard(
    State(state): State<HttpState>,
    Json(selection): Json<Selection>,
) -> Json<DashboardUpdate> {
    Json(state.service.dashboard().update(&selection))
}

async fn health(State(state): State<HttpState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        rows: state.service.dashboard().table().row_count(),
        started_at: state.started_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_gets_ws_port() {
        let page = render_index(9123);
        assert!(page.contains("9123"));
        assert!(!page.contains(WS_PORT_PLACEHOLDER));
        assert!(page.contains("plotly"));
    }
}
