//! Run a program with tokio and capture its standard output.

use std::process::Stdio;

use snutz_app::ports::{CommandExecutor, ProcessOutput};
use snutz_domain::error::SnutzError;
use tokio::process::Command;

/// Spawns programs as child processes of the agent.
///
/// Standard input is closed and standard error is discarded. The child is
/// killed if the future is dropped before it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandExecutor;

impl CommandExecutor for TokioCommandExecutor {
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, SnutzError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| SnutzError::Process {
                program: program.to_string(),
                source,
            })?;
        tracing::debug!(program, status = %output.status, "process exited");
        Ok(ProcessOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn should_capture_stdout_when_program_succeeds() {
        let output = TokioCommandExecutor
            .run("sh", &args(&["-c", "echo hello; echo oops >&2"]))
            .await
            .unwrap();

        assert!(output.success);
        assert_eq!(output.stdout, "hello\n");
    }

    #[tokio::test]
    async fn should_report_non_zero_exit_as_unsuccessful() {
        let output = TokioCommandExecutor
            .run("sh", &args(&["-c", "echo partial; exit 3"]))
            .await
            .unwrap();

        assert!(!output.success);
        assert_eq!(output.stdout, "partial\n");
    }

    #[tokio::test]
    async fn should_fail_when_program_does_not_exist() {
        let err = TokioCommandExecutor
            .run("snutz-no-such-program", &[])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SnutzError::Process { ref program, .. } if program == "snutz-no-such-program"
        ));
    }

    #[tokio::test]
    async fn should_stop_waiting_when_timeout_elapses() {
        let started = std::time::Instant::now();

        let result = tokio::time::timeout(
            Duration::from_millis(200),
            TokioCommandExecutor.run("sleep", &args(&["10"])),
        )
        .await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
