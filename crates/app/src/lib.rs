//! # snutz-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DashboardApi`: read devices and test results, create commands
//!   - `DeviceRegistry`: register a device and send heartbeats
//!   - `DashboardView`: overwrite one region of the dashboard document, or the
//!     device selector's choices
//!   - `Notifier`: show a blocking notification to the user
//!   - `Clock`: the local notion of "now"
//!   - `CommandExecutor`: run a local program and capture its output
//! - Render fetched data into markup with pure functions (`render`)
//! - Provide the use-cases: `DeviceLoader`, `ResultLoader`, `CommandSubmitter`,
//!   `HeartbeatAgent`, `PingRunner`, and the `Poller` that drives both loaders
//!   on a timer
//!
//! ## Dependency rule
//! Depends on `snutz-domain` only (plus `tokio` for timers and tasks and
//! `askama` for the markup templates).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod poller;
pub mod ports;
pub mod render;
pub mod services;

#[cfg(test)]
mod test_support;
