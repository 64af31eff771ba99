//! # snutzd: snutz dashboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the backend client (adapter)
//! - Construct the loaders and the poller, injecting the client and the
//!   dashboard document via port traits
//! - Build the axum router and serve the dashboard
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use snutz_adapter_http_axum::regions::DashboardRegions;
use snutz_adapter_http_axum::state::AppState;
use snutz_adapter_http_reqwest::HttpBackend;
use snutz_app::poller::Poller;
use snutz_app::ports::SystemClock;
use snutz_app::services::device_loader::DeviceLoader;
use snutz_app::services::result_loader::ResultLoader;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Backend
    let api = Arc::new(HttpBackend::new(config.api.base_url.as_str()));
    tracing::info!(base_url = api.base_url(), "using backend");

    // Dashboard document, written by the poller and read by the handlers
    let regions = Arc::new(DashboardRegions::new());

    // Poller
    let poller = Poller::new(
        DeviceLoader::new(
            Arc::clone(&api),
            Arc::clone(&regions),
            Arc::clone(&regions),
            SystemClock,
        ),
        ResultLoader::new(Arc::clone(&api), Arc::clone(&regions), SystemClock),
        config.poll_interval(),
    );
    let polling = poller.spawn();

    // HTTP
    let state = AppState::new(api, regions, config.poll.interval_secs);
    let app = snutz_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "snutzd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    polling.abort();
    tracing::info!("snutzd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
