//! Device loader: fetch devices, render the table and the device selector.

use snutz_domain::error::SnutzError;

use crate::ports::{Clock, DashboardApi, DashboardView, Notifier, Region};
use crate::render;

/// Alert shown when the device list cannot be loaded.
pub const CONNECTION_ALERT: &str = "Error: Could not connect to server. Is it running?";

/// Loads `/devices` into the devices region and the device selector.
pub struct DeviceLoader<A, V, N, C> {
    api: A,
    view: V,
    notifier: N,
    clock: C,
}

impl<A, V, N, C> DeviceLoader<A, V, N, C>
where
    A: DashboardApi,
    V: DashboardView,
    N: Notifier,
    C: Clock,
{
    /// Create a new loader from its ports.
    pub fn new(api: A, view: V, notifier: N, clock: C) -> Self {
        Self {
            api,
            view,
            notifier,
            clock,
        }
    }

    /// Fetch, render and replace both regions.
    ///
    /// On failure the error is logged and the user is alerted; both regions
    /// keep whatever they showed before.
    ///
    /// # Errors
    ///
    /// Returns the transport, status or payload error that stopped the load.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<usize, SnutzError> {
        match self.refresh().await {
            Ok(count) => Ok(count),
            Err(err) => {
                tracing::error!(%err, "failed to load devices");
                self.notifier.alert(CONNECTION_ALERT);
                Err(err)
            }
        }
    }

    async fn refresh(&self) -> Result<usize, SnutzError> {
        let devices = self.api.list_devices().await?;
        tracing::debug!(count = devices.len(), "devices fetched");

        let table = render::devices_section(&devices, self.clock.now())?;
        let count = devices.len();
        self.view.replace(Region::Devices, table);
        self.view.replace_device_choices(devices);
        Ok(count)
    }
}
