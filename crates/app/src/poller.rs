//! Poller: runs both loaders at startup and then on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::ports::{Clock, DashboardApi, DashboardView, Notifier};
use crate::services::device_loader::DeviceLoader;
use crate::services::result_loader::ResultLoader;

/// Default delay between two poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Drives the [`DeviceLoader`] and the [`ResultLoader`].
///
/// There is no in-flight guard: every tick starts a new cycle in its own task
/// even if the previous one is still waiting on the network, so overlapping
/// cycles are possible and the last write to a region wins.
pub struct Poller<A, V, N, C> {
    devices: DeviceLoader<A, V, N, C>,
    results: ResultLoader<A, V, C>,
    interval: Duration,
}

impl<A, V, N, C> Poller<A, V, N, C>
where
    A: DashboardApi,
    V: DashboardView,
    N: Notifier,
    C: Clock,
{
    pub fn new(
        devices: DeviceLoader<A, V, N, C>,
        results: ResultLoader<A, V, C>,
        interval: Duration,
    ) -> Self {
        Self {
            devices,
            results,
            interval,
        }
    }

    /// Run one cycle: devices first, then results.
    ///
    /// Each loader surfaces its own failures; a failing loader does not stop
    /// the other one.
    pub async fn run_once(&self) {
        let _ = self.devices.load().await;
        let _ = self.results.load().await;
    }
}

impl<A, V, N, C> Poller<A, V, N, C>
where
    A: DashboardApi + Send + Sync + 'static,
    V: DashboardView + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Start polling in the background. The first cycle starts immediately.
    ///
    /// Aborting the returned handle stops the timer; cycles already started
    /// run to completion.
    pub fn spawn(self) -> JoinHandle<()> {
        let poller = Arc::new(self);
        tracing::info!(interval_secs = poller.interval.as_secs(), "poller started");
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poller.interval);
            loop {
                ticker.tick().await;
                let cycle = Arc::clone(&poller);
                tokio::spawn(async move { cycle.run_once().await });
            }
        })
    }
}
