//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod command_submitter;
pub mod device_loader;
pub mod heartbeat_agent;
pub mod ping_runner;
pub mod result_loader;
