//! # snutz-adapter-http-reqwest
//!
//! Outbound HTTP adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `DashboardApi` port: `GET /devices`, `GET /tests/results`,
//!   `POST /commands/create`
//! - Implement the `DeviceRegistry` port: `POST /devices/register`,
//!   `POST /devices/{id}/heartbeat`
//! - Map transport failures, non-2xx statuses and malformed bodies into
//!   `SnutzError`
//!
//! ## Dependency rule
//! Depends on `snutz-app` (for port traits) and `snutz-domain` (for the types
//! exchanged with the backend). Never leaks reqwest types past the port boundary.

pub mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, HttpBackend};
pub use error::HttpError;
