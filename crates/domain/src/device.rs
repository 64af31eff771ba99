//! Device: a remote agent that reports liveness through periodic heartbeats.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, elapsed_millis};

/// A device counts as online when it was seen less than this long ago.
pub const ONLINE_WINDOW_MILLIS: i64 = 60_000;

/// A registered device as reported by the backend.
///
/// There is no identity beyond `device_id`; values are rebuilt from the
/// server response on every poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub device_id: String,
    pub name: String,
    /// Last heartbeat. `None` when the device registered but never reported.
    #[serde(
        default,
        deserialize_with = "crate::time::deserialize_optional_timestamp"
    )]
    pub last_seen: Option<Timestamp>,
}

impl Device {
    /// Create a device that has not reported a heartbeat yet.
    #[must_use]
    pub fn new(device_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            name: name.into(),
            last_seen: None,
        }
    }

    /// Set the last heartbeat time.
    #[must_use]
    pub fn with_last_seen(mut self, last_seen: Timestamp) -> Self {
        self.last_seen = Some(last_seen);
        self
    }

    /// Milliseconds since the last heartbeat, if any.
    #[must_use]
    pub fn elapsed_millis(&self, now: Timestamp) -> Option<i64> {
        self.last_seen.map(|seen| elapsed_millis(seen, now))
    }

    /// Classify the device as online or offline at `now`.
    #[must_use]
    pub fn status_at(&self, now: Timestamp) -> DeviceStatus {
        match self.elapsed_millis(now) {
            Some(millis) if millis < ONLINE_WINDOW_MILLIS => DeviceStatus::Online,
            _ => DeviceStatus::Offline,
        }
    }

    /// "`N` seconds ago" under a minute, "`N` minutes ago" beyond, "never"
    /// without a heartbeat.
    #[must_use]
    pub fn last_seen_label(&self, now: Timestamp) -> String {
        match self.elapsed_millis(now) {
            None => "never".to_string(),
            Some(millis) if millis < ONLINE_WINDOW_MILLIS => {
                format!("{} seconds ago", millis / 1_000)
            }
            Some(millis) => format!("{} minutes ago", millis / 60_000),
        }
    }

    /// Label used in the device selector, e.g. `test-1 (Test)`.
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.device_id, self.name)
    }
}

/// Liveness classification derived from `last_seen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Online,
    Offline,
}

impl DeviceStatus {
    /// Text shown in the status column.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }

    /// Style class distinguishing the two states.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Online => "status-online",
            Self::Offline => "status-offline",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
