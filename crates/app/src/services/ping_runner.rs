//! Ping runner: execute a ping on the agent's host and report the outcome.

use std::time::Duration;

use snutz_domain::ping::{PING_PROGRAM, PING_TIMEOUT, PingReport, ping_args};

use crate::ports::CommandExecutor;

/// Runs `ping` through a [`CommandExecutor`] and turns whatever happens into
/// a [`PingReport`]. It never fails: spawn errors and timeouts are reported
/// as unsuccessful runs.
pub struct PingRunner<E> {
    executor: E,
    timeout: Duration,
    windows: bool,
}

impl<E: CommandExecutor> PingRunner<E> {
    /// Create a runner with the default 30 s limit and the host's `ping` flags.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            timeout: PING_TIMEOUT,
            windows: cfg!(windows),
        }
    }

    /// Override the time limit of a single run.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ping `target` `count` times.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, target: &str, count: u32) -> PingReport {
        let args = ping_args(target, count, self.windows);
        match tokio::time::timeout(self.timeout, self.executor.run(PING_PROGRAM, &args)).await {
            Ok(Ok(output)) => {
                tracing::info!(success = output.success, "ping finished");
                PingReport::completed(target, count, output.success, output.stdout)
            }
            Ok(Err(err)) => {
                tracing::error!(%err, "ping could not run");
                PingReport::failed(target, err.to_string())
            }
            Err(_) => {
                tracing::warn!(timeout_secs = self.timeout.as_secs(), "ping timed out");
                PingReport::timed_out(target, self.timeout)
            }
        }
    }
}
