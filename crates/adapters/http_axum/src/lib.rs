//! # snutz-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **dashboard page** with **zero JavaScript**: a static shell with
//!   the command form, and the devices and results cards as frames that
//!   auto-reload with `<meta http-equiv="refresh">`
//! - Hold the dashboard document in memory ([`regions::DashboardRegions`]):
//!   loaders overwrite its regions, notifications queue up as alerts
//! - Map the command form POST into the `CommandSubmitter` use-case and
//!   redirect back to the page (PRG pattern), carrying the submitted values
//!   in the query string so the form comes back filled in
//!
//! ## Dependency rule
//! Depends on `snutz-app` (for port traits and services) and `snutz-domain`
//! (for form types). Never leaks axum types into the domain.

pub mod dashboard;
pub mod error;
pub mod page;
pub mod regions;
pub mod router;
pub mod state;
