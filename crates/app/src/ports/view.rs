//! View ports: the document the dashboard renders into, and user notifications.

use std::sync::Arc;

use snutz_domain::device::Device;

/// A region of the dashboard document that is replaced wholesale on each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The devices card: heading plus devices table.
    Devices,
    /// The results card: heading plus results table.
    Results,
}

/// Write access to the dashboard document.
///
/// Each call overwrites the full previous content of its target.
pub trait DashboardView {
    fn replace(&self, region: Region, markup: String);

    /// Rebuild the device selector from `devices`, in the given order.
    ///
    /// The document renders the options itself so it can keep the user's
    /// current selection.
    fn replace_device_choices(&self, devices: Vec<Device>);
}

/// Blocking, user-facing notifications.
pub trait Notifier {
    fn alert(&self, message: &str);
}

impl<T: DashboardView> DashboardView for Arc<T> {
    fn replace(&self, region: Region, markup: String) {
        (**self).replace(region, markup);
    }

    fn replace_device_choices(&self, devices: Vec<Device>) {
        (**self).replace_device_choices(devices);
    }
}

impl<T: Notifier> Notifier for Arc<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}
