//! Coaster Log HTTP Server Binary
//!
//! Loads the bundled ride log, builds the dashboard snapshot once and serves
//! it as a REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin coaster-server
//!
//! # With a custom vocabulary and colors
//! DASHBOARD_CONFIG=./dashboard.toml cargo run --bin coaster-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DASHBOARD_CONFIG`: Path to a dashboard TOML file (default: search
//!   `dashboard.toml`, `backend/dashboard.toml`, `../dashboard.toml`)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use coaster_log::config::DashboardConfig;
use coaster_log::http::{create_router, AppState};
use coaster_log::services::DashboardSnapshot;
use coaster_log::store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; library `log` records are forwarded too
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Coaster Log HTTP Server");

    let config = DashboardConfig::load()?;
    let store = RecordStore::embedded()?;
    info!(
        "Ride log loaded: {} coasters, {} warnings",
        store.len(),
        store.validation_report().warnings.len()
    );

    let snapshot = DashboardSnapshot::from_store(&store, config)?;
    let state = AppState::new(snapshot);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
