//! Device registry port: what an agent needs from the backend.

use std::future::Future;
use std::sync::Arc;

use snutz_domain::error::SnutzError;
use snutz_domain::time::Timestamp;

/// Registration and liveness reporting for a single device.
pub trait DeviceRegistry {
    /// `POST /devices/register`.
    fn register(
        &self,
        device_id: &str,
        name: &str,
    ) -> impl Future<Output = Result<(), SnutzError>> + Send;

    /// `POST /devices/{id}/heartbeat`. Returns the `last_seen` the server recorded.
    fn heartbeat(&self, device_id: &str)
    -> impl Future<Output = Result<Timestamp, SnutzError>> + Send;
}

impl<T: DeviceRegistry + Send + Sync> DeviceRegistry for Arc<T> {
    fn register(
        &self,
        device_id: &str,
        name: &str,
    ) -> impl Future<Output = Result<(), SnutzError>> + Send {
        (**self).register(device_id, name)
    }

    fn heartbeat(&self, device_id: &str)
    -> impl Future<Output = Result<Timestamp, SnutzError>> + Send {
        (**self).heartbeat(device_id)
    }
}
