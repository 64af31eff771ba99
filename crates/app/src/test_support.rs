//! In-memory fakes of the ports, shared by the service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{TimeZone, Utc};
use snutz_domain::command::CommandRequest;
use snutz_domain::device::Device;
use snutz_domain::error::SnutzError;
use snutz_domain::test_result::TestResults;
use snutz_domain::time::Timestamp;

use crate::ports::{Clock, DashboardApi, DashboardView, DeviceRegistry, Notifier, Region};

pub(crate) fn fixed_now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Canned answer of a fake endpoint.
#[derive(Debug, Clone)]
pub(crate) enum Reply<T> {
    Ok(T),
    Status(u16),
    Unreachable,
    Malformed,
}

impl<T: Clone> Reply<T> {
    fn produce(&self) -> Result<T, SnutzError> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Status(code) => Err(SnutzError::Status(*code)),
            Self::Unreachable => Err(SnutzError::Transport("connection refused".into())),
            Self::Malformed => Err(serde_json::from_str::<serde_json::Value>("{")
                .unwrap_err()
                .into()),
        }
    }
}

pub(crate) struct FakeApi {
    devices: Mutex<Reply<Vec<Device>>>,
    results: Mutex<Reply<TestResults>>,
    command: Mutex<Reply<()>>,
    pub device_fetches: AtomicUsize,
    pub result_fetches: AtomicUsize,
    pub submitted: Mutex<Vec<CommandRequest>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            devices: Mutex::new(Reply::Ok(Vec::new())),
            results: Mutex::new(Reply::Ok(TestResults::default())),
            command: Mutex::new(Reply::Ok(())),
            device_fetches: AtomicUsize::new(0),
            result_fetches: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn set_devices(&self, reply: Reply<Vec<Device>>) {
        *self.devices.lock().unwrap() = reply;
    }

    pub fn set_results(&self, reply: Reply<TestResults>) {
        *self.results.lock().unwrap() = reply;
    }

    pub fn set_command(&self, reply: Reply<()>) {
        *self.command.lock().unwrap() = reply;
    }

    pub fn submitted(&self) -> Vec<CommandRequest> {
        self.submitted.lock().unwrap().clone()
    }
}

impl DashboardApi for FakeApi {
    async fn list_devices(&self) -> Result<Vec<Device>, SnutzError> {
        self.device_fetches.fetch_add(1, Ordering::SeqCst);
        self.devices.lock().unwrap().produce()
    }

    async fn list_test_results(&self) -> Result<TestResults, SnutzError> {
        self.result_fetches.fetch_add(1, Ordering::SeqCst);
        self.results.lock().unwrap().produce()
    }

    async fn create_command(&self, request: &CommandRequest) -> Result<(), SnutzError> {
        self.submitted.lock().unwrap().push(request.clone());
        self.command.lock().unwrap().produce()
    }
}

#[derive(Default)]
pub(crate) struct FakeRegistry {
    pub registered: Mutex<Vec<(String, String)>>,
    pub heartbeats: AtomicUsize,
    pub fail_heartbeats: bool,
}

impl DeviceRegistry for FakeRegistry {
    async fn register(&self, device_id: &str, name: &str) -> Result<(), SnutzError> {
        self.registered
            .lock()
            .unwrap()
            .push((device_id.to_string(), name.to_string()));
        Ok(())
    }

    async fn heartbeat(&self, _device_id: &str) -> Result<Timestamp, SnutzError> {
        self.heartbeats.fetch_add(1, Ordering::SeqCst);
        if self.fail_heartbeats {
            Err(SnutzError::Status(404))
        } else {
            Ok(fixed_now())
        }
    }
}

/// Records every write, keeping only the latest per region.
#[derive(Default)]
pub(crate) struct RecordingView {
    regions: Mutex<HashMap<Region, String>>,
    choices: Mutex<Option<Vec<Device>>>,
    pub writes: AtomicUsize,
}

impl RecordingView {
    pub fn get(&self, region: Region) -> Option<String> {
        self.regions.lock().unwrap().get(&region).cloned()
    }

    pub fn choices(&self) -> Option<Vec<Device>> {
        self.choices.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl DashboardView for RecordingView {
    fn replace(&self, region: Region, markup: String) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.regions.lock().unwrap().insert(region, markup);
    }

    fn replace_device_choices(&self, devices: Vec<Device>) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.choices.lock().unwrap() = Some(devices);
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
