//! Process port: run a local program to completion.

use std::future::Future;
use std::sync::Arc;

use snutz_domain::error::SnutzError;

/// What a finished process left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Whether the process exited with status 0.
    pub success: bool,
    /// Captured standard output, decoded lossily as UTF-8.
    pub stdout: String,
}

/// Runs programs on the host the agent lives on.
///
/// Implementations must stop the child when the returned future is dropped,
/// so callers can bound a run with a timeout.
pub trait CommandExecutor {
    /// Run `program` with `args` and wait for it to exit.
    fn run(
        &self,
        program: &str,
        args: &[String],
    ) -> impl Future<Output = Result<ProcessOutput, SnutzError>> + Send;
}

impl<T: CommandExecutor + Send + Sync> CommandExecutor for Arc<T> {
    fn run(
        &self,
        program: &str,
        args: &[String],
    ) -> impl Future<Output = Result<ProcessOutput, SnutzError>> + Send {
        (**self).run(program, args)
    }
}
