//! Heartbeat agent: register a device once, then keep reporting liveness.

use std::time::Duration;

use snutz_domain::error::SnutzError;
use snutz_domain::time::Timestamp;

use crate::ports::DeviceRegistry;

/// Keeps one device marked as online on the backend.
pub struct HeartbeatAgent<R> {
    registry: R,
    device_id: String,
    name: String,
    interval: Duration,
}

impl<R: DeviceRegistry> HeartbeatAgent<R> {
    /// Create an agent for `device_id` that beats every `interval`.
    pub fn new(
        registry: R,
        device_id: impl Into<String>,
        name: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            registry,
            device_id: device_id.into(),
            name: name.into(),
            interval,
        }
    }

    /// Register the device with the backend.
    ///
    /// # Errors
    ///
    /// Returns the registry error unchanged.
    #[tracing::instrument(skip(self), fields(device_id = %self.device_id))]
    pub async fn register(&self) -> Result<(), SnutzError> {
        self.registry.register(&self.device_id, &self.name).await?;
        tracing::info!(name = %self.name, "device registered");
        Ok(())
    }

    /// Send a single heartbeat.
    ///
    /// # Errors
    ///
    /// Returns the registry error unchanged.
    pub async fn beat(&self) -> Result<Timestamp, SnutzError> {
        let last_seen = self.registry.heartbeat(&self.device_id).await?;
        tracing::info!(%last_seen, "heartbeat sent");
        Ok(last_seen)
    }

    /// Heartbeat forever, once per interval, starting immediately.
    ///
    /// A failed heartbeat is logged and retried on the next tick.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            if let Err(err) = self.beat().await {
                tracing::warn!(%err, device_id = %self.device_id, "heartbeat failed");
            }
        }
    }
}
