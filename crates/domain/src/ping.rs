//! Ping reports: what an agent records after pinging a target.
//!
//! A report serializes to the `result_data` document the dashboard decodes,
//! so `success` is always present and the rest depends on how the run ended.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SnutzError;

/// Executable invoked for a ping.
pub const PING_PROGRAM: &str = "ping";

/// Longest a single ping run may take before it is abandoned.
pub const PING_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of trailing output lines kept as the summary.
const SUMMARY_LINES: usize = 3;

/// Command-line arguments for `ping`, e.g. `["-c", "4", "8.8.8.8"]`.
///
/// Windows spells the count flag `-n`, every other platform `-c`.
#[must_use]
pub fn ping_args(target: &str, count: u32, windows: bool) -> Vec<String> {
    let flag = if windows { "-n" } else { "-c" };
    vec![flag.to_string(), count.to_string(), target.to_string()]
}

/// Outcome of one ping run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingReport {
    pub success: bool,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packets_sent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PingReport {
    /// Report for a `ping` process that ran to completion.
    ///
    /// On success the summary is the last three `\n`-separated pieces of the
    /// output (a trailing newline yields an empty last piece). On failure it
    /// is the single line `Ping Failed`.
    #[must_use]
    pub fn completed(target: &str, count: u32, exit_ok: bool, stdout: String) -> Self {
        let summary = if exit_ok {
            let pieces: Vec<&str> = stdout.split('\n').collect();
            pieces[pieces.len().saturating_sub(SUMMARY_LINES)..]
                .iter()
                .map(ToString::to_string)
                .collect()
        } else {
            vec!["Ping Failed".to_string()]
        };
        Self {
            success: exit_ok,
            target: target.to_string(),
            packets_sent: Some(count),
            output: Some(stdout),
            summary: Some(summary),
            error: None,
        }
    }

    /// Report for a run abandoned after `after`.
    #[must_use]
    pub fn timed_out(target: &str, after: Duration) -> Self {
        Self::failed(target, format!("Ping timed out ({}s)", after.as_secs()))
    }

    /// Report for a run that could not be carried out at all.
    #[must_use]
    pub fn failed(target: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            target: target.to_string(),
            packets_sent: None,
            output: None,
            summary: None,
            error: Some(error.into()),
        }
    }

    /// The report as a `result_data` JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SnutzError::Payload`] if serialization fails.
    pub fn to_result_data(&self) -> Result<String, SnutzError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_result::{ResultData, ResultStatus};

    #[test]
    fn should_use_count_flag_per_platform() {
        assert_eq!(ping_args("8.8.8.8", 4, false), ["-c", "4", "8.8.8.8"]);
        assert_eq!(ping_args("8.8.8.8", 2, true), ["-n", "2", "8.8.8.8"]);
    }

    #[test]
    fn should_keep_last_three_pieces_when_ping_succeeds() {
        let stdout = "PING x\n64 bytes\n--- x ping statistics ---\n4 packets transmitted\nrtt avg 1.0\n";
        let report = PingReport::completed("x", 4, true, stdout.to_string());

        assert!(report.success);
        assert_eq!(report.packets_sent, Some(4));
        assert_eq!(
            report.summary.unwrap(),
            ["4 packets transmitted", "rtt avg 1.0", ""]
        );
    }

    #[test]
    fn should_keep_short_output_whole() {
        let report = PingReport::completed("x", 4, true, "only".to_string());
        assert_eq!(report.summary.unwrap(), ["only"]);
    }

    #[test]
    fn should_mark_summary_failed_when_exit_status_is_not_zero() {
        let report = PingReport::completed("x", 4, false, "unknown host\n".to_string());

        assert!(!report.success);
        assert_eq!(report.summary.unwrap(), ["Ping Failed"]);
        assert_eq!(report.output.as_deref(), Some("unknown host\n"));
    }

    #[test]
    fn should_state_timeout_in_seconds() {
        let report = PingReport::timed_out("x", PING_TIMEOUT);
        assert_eq!(report.error.as_deref(), Some("Ping timed out (30s)"));
        assert!(report.output.is_none());
    }

    #[test]
    fn should_omit_absent_fields_from_result_data() {
        let json = PingReport::failed("10.0.0.1", "no such file")
            .to_result_data()
            .unwrap();
        assert_eq!(
            json,
            r#"{"success":false,"target":"10.0.0.1","error":"no such file"}"#
        );
    }

    #[test]
    fn should_decode_as_result_data() {
        let json = PingReport::completed("8.8.8.8", 4, true, "ok\n".to_string())
            .to_result_data()
            .unwrap();

        let data: ResultData = serde_json::from_str(&json).unwrap();

        assert_eq!(data.status(), ResultStatus::Success);
        assert_eq!(data.details["packets_sent"], 4);
        assert_eq!(data.details["target"], "8.8.8.8");
    }
}
