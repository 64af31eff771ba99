//! # snutz-agent: device-side companion of the dashboard
//!
//! By default it registers this device with the backend, then sends a
//! heartbeat on a fixed interval so the dashboard shows it as online.
//!
//! `snutz-agent ping <target> [count]` runs one ping on this host and prints
//! the report as the `result_data` JSON the dashboard understands.

mod config;
mod mode;

use snutz_adapter_http_reqwest::HttpBackend;
use snutz_adapter_process_tokio::TokioCommandExecutor;
use snutz_app::services::heartbeat_agent::HeartbeatAgent;
use snutz_app::services::ping_runner::PingRunner;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::mode::Mode;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mode = Mode::from_args(std::env::args().skip(1))?;
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    match mode {
        Mode::Heartbeat => heartbeat(&config).await?,
        Mode::Ping { target, count } => {
            let report = PingRunner::new(TokioCommandExecutor)
                .run(&target, count)
                .await;
            println!("{}", report.to_result_data()?);
        }
    }
    Ok(())
}

async fn heartbeat(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let registry = HttpBackend::new(config.agent.server_url.as_str());
    let agent = HeartbeatAgent::new(
        registry,
        config.agent.device_id.as_str(),
        config.agent.name.as_str(),
        config.heartbeat_interval(),
    );

    agent.register().await?;

    tokio::select! {
        () = agent.run() => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(err) = result {
                tracing::error!(%err, "failed to listen for shutdown signal");
            }
            tracing::info!("shutdown requested");
        }
    }

    tracing::info!("snutz-agent stopped");
    Ok(())
}
