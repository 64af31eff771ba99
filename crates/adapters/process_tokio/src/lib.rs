//! # snutz-adapter-process-tokio
//!
//! [`CommandExecutor`](snutz_app::ports::CommandExecutor) backed by
//! [`tokio::process::Command`].
//!
//! ## Dependency rule
//! Depends on `snutz-app` (for the port trait) and `snutz-domain` (for the
//! error type). Nothing else in the workspace spawns processes.

mod executor;

pub use executor::TokioCommandExecutor;
