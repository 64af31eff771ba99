//! # snutz-domain
//!
//! Pure domain model for the snutz device dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, relative-time formatting
//! - Define **Devices** (remote agents reporting liveness through `last_seen`)
//! - Define **Test results** (outcome records of dispatched commands)
//! - Define **Commands** (diagnostic requests built from the dashboard form)
//! - Define **Ping reports** (what an agent records after running a ping)
//! - Contain all validation and status classification
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod command;
pub mod device;
pub mod ping;
pub mod test_result;
