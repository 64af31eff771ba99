//! In-memory dashboard document.

use std::sync::{Mutex, PoisonError, RwLock};

use snutz_app::ports::{DashboardView, Notifier, Region};
use snutz_domain::device::Device;

/// Most alerts kept between two page renders. The oldest is dropped first.
pub const MAX_PENDING_ALERTS: usize = 8;

/// What each region of the page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionsSnapshot {
    pub devices: String,
    pub device_choices: Vec<Device>,
    pub results: String,
}

impl Default for RegionsSnapshot {
    fn default() -> Self {
        Self {
            devices: "<h2>Registered Devices</h2>\n<p>Loading devices...</p>".to_string(),
            device_choices: Vec::new(),
            results: String::new(),
        }
    }
}

/// The dashboard document shared between the poller and the HTTP handlers.
///
/// Regions are replaced wholesale; concurrent writers race and the last
/// write wins. Alerts queue up until the next render drains them. An alert
/// identical to one already pending replaces it, so a backend that stays
/// down yields a single dialog no matter how many polls failed.
#[derive(Debug, Default)]
pub struct DashboardRegions {
    regions: RwLock<RegionsSnapshot>,
    alerts: Mutex<Vec<String>>,
}

impl DashboardRegions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current content of every region.
    #[must_use]
    pub fn snapshot(&self) -> RegionsSnapshot {
        self.regions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return every pending alert, oldest first.
    #[must_use]
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut *self.alerts.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DashboardView for DashboardRegions {
    fn replace(&self, region: Region, markup: String) {
        let mut regions = self
            .regions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match region {
            Region::Devices => regions.devices = markup,
            Region::Results => regions.results = markup,
        }
    }

    fn replace_device_choices(&self, devices: Vec<Device>) {
        self.regions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .device_choices = devices;
    }
}

impl Notifier for DashboardRegions {
    fn alert(&self, message: &str) {
        let mut alerts = self.alerts.lock().unwrap_or_else(PoisonError::into_inner);
        alerts.retain(|pending| pending != message);
        if alerts.len() == MAX_PENDING_ALERTS {
            alerts.remove(0);
        }
        alerts.push(message.to_string());
        tracing::debug!(message, pending = alerts.len(), "alert queued");
    }
}
