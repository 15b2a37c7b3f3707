// Statline entry point.
//
// `generate-sample` writes a CSV and exits; it reads `config/` only if
// present. Otherwise the startup sequence is:
// 1. Parse arguments, load config, apply overrides
// 2. Initialize tracing
// 3. Generate sample data if configured and missing
// 4. Load the season table and build the dashboard
// 5. Spawn the WebSocket server task
// 6. Serve HTTP until Ctrl+C, then stop the WebSocket task

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use statline_app::app::DashboardService;
use statline_app::cli::{Args, Command};
use statline_app::http::{self, HttpState};
use statline_baseball::dashboard::{Dashboard, DashboardDefaults};
use statline_baseball::sample;
use statline_baseball::table::load_table;
use statline_core::config::{self, Config};
use statline_core::{logging, ws_server};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Command::GenerateSample { out, seed } = args.command() {
        let config = args.sample_config();
        let log_config = config.as_ref().map(|c| c.logging.clone()).unwrap_or_default();
        logging::init_tracing(&log_config)?;
        let seed = seed.or_else(|| config.and_then(|c| c.data.sample_seed));
        return generate_sample(&out, seed);
    }

    let config = config::load_config(&args.base_dir).context("failed to load configuration")?;
    let config = args.apply(config).context("invalid command-line override")?;

    logging::init_tracing(&config.logging)?;
    info!("Statline starting up");

    serve(&args.base_dir, config).await
}

fn generate_sample(path: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let rows = sample::generate_sample(&mut sample::sample_rng(seed));
    sample::write_sample_csv(path, &rows)
        .with_context(|| format!("failed to write sample data to {}", path.display()))
}

async fn serve(base_dir: &Path, config: Config) -> anyhow::Result<()> {
    let data_path = base_dir.join(&config.data.path);
    if !data_path.exists() && config.data.generate_sample_if_missing {
        info!("No data at {}, generating sample", data_path.display());
        generate_sample(&data_path, config.data.sample_seed)?;
    }

    let table = load_table(&data_path)
        .with_context(|| format!("failed to load season data from {}", data_path.display()))?;
    info!(
        "Loaded {} rows, {} columns from {}",
        table.row_count(),
        table.columns().len(),
        data_path.display()
    );

    let defaults = DashboardDefaults::from_config(&config.dashboard)
        .context("invalid dashboard defaults")?;
    let service = DashboardService::new(Arc::new(Dashboard::new(table, defaults)));

    // WebSocket server
    let host = config.server.host.clone();
    let ws_port = config.server.ws_port;
    let ws_listener = ws_server::bind(&host, ws_port)
        .await
        .with_context(|| format!("failed to bind WebSocket server on {host}:{ws_port}"))?;
    let ws_handler = Arc::new(service.clone());
    let ws_handle = tokio::spawn(async move {
        if let Err(e) = ws_server::run(ws_listener, ws_handler).await {
            error!("WebSocket server error: {}", e);
        }
    });

    // HTTP server
    let http_port = config.server.http_port;
    let listener = TcpListener::bind(format!("{host}:{http_port}"))
        .await
        .with_context(|| format!("failed to bind HTTP server on {host}:{http_port}"))?;
    info!("Dashboard available at http://{}", listener.local_addr()?);

    let state = HttpState {
        service,
        ws_port,
        started_at: chrono::Utc::now(),
    };
    axum::serve(listener, http::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    // The accept loop never returns on its own.
    ws_handle.abort();

    info!("Statline shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received, shutting down");
}
