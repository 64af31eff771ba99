//! Test result: the outcome record of a previously dispatched command.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SnutzError;
use crate::time::Timestamp;

/// One row of `/tests/results`.
///
/// `result_data` is a JSON document encoded as a string; use
/// [`TestResult::decode`] to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: i64,
    pub device_id: String,
    pub test_type: String,
    pub target: String,
    #[serde(deserialize_with = "crate::time::deserialize_timestamp")]
    pub timestamp: Timestamp,
    pub result_data: String,
}

impl TestResult {
    /// Decode the embedded `result_data` document.
    ///
    /// # Errors
    ///
    /// Returns [`SnutzError::Payload`] when `result_data` is not a JSON object.
    pub fn decode(&self) -> Result<ResultData, SnutzError> {
        Ok(serde_json::from_str(&self.result_data)?)
    }
}

/// Decoded `result_data`.
///
/// Only `success` is interpreted; everything else the device reported is
/// kept in `details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultData {
    #[serde(default)]
    pub success: bool,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ResultData {
    #[must_use]
    pub fn status(&self) -> ResultStatus {
        if self.success {
            ResultStatus::Success
        } else {
            ResultStatus::Failed
        }
    }
}

/// Outcome classification of a test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    Success,
    Failed,
}

impl ResultStatus {
    /// Text shown in the result column.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failed => "Failed",
        }
    }

    /// Style class distinguishing the two outcomes.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "result-success",
            Self::Failed => "result-failed",
        }
    }
}

/// Body of `/tests/results`. `count` is carried but not rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestResults {
    pub results: Vec<TestResult>,
    #[serde(default)]
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn result_with(data: &str) -> TestResult {
        TestResult {
            id: 1,
            device_id: "test-1".to_string(),
            test_type: "ping".to_string(),
            target: "8.8.8.8".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            result_data: data.to_string(),
        }
    }

    #[test]
    fn should_classify_success_when_flag_is_true() {
        let data = result_with(r#"{"success":true}"#).decode().unwrap();
        assert_eq!(data.status(), ResultStatus::Success);
        assert_eq!(data.status().label(), "Success");
    }

    #[test]
    fn should_classify_failed_when_flag_is_false() {
        let data = result_with(r#"{"success":false}"#).decode().unwrap();
        assert_eq!(data.status(), ResultStatus::Failed);
        assert_eq!(data.status().label(), "Failed");
    }

    #[test]
    fn should_treat_missing_success_flag_as_failed() {
        let data = result_with(r#"{"error":"Ping timed out (30s)"}"#)
            .decode()
            .unwrap();
        assert_eq!(data.status(), ResultStatus::Failed);
        assert_eq!(data.details["error"], "Ping timed out (30s)");
    }

    #[test]
    fn should_keep_extra_fields_in_details() {
        let data = result_with(r#"{"success":true,"packets_sent":4,"target":"8.8.8.8"}"#)
            .decode()
            .unwrap();
        assert_eq!(data.details["packets_sent"], 4);
        assert!(!data.details.contains_key("success"));
    }

    #[test]
    fn should_fail_to_decode_malformed_result_data() {
        let err = result_with("{not json").decode().unwrap_err();
        assert!(matches!(err, SnutzError::Payload(_)));
    }

    #[test]
    fn should_deserialize_results_body_with_naive_timestamp() {
        let body = r#"{
            "results": [{
                "id": 7,
                "device_id": "test-1",
                "test_type": "ping",
                "target": "google.com",
                "timestamp": "2024-05-01T12:00:00.500000",
                "result_data": "{\"success\": true}"
            }],
            "count": 1
        }"#;
        let parsed: TestResults = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.count, 1);
        assert_eq!(parsed.results[0].id, 7);
        assert!(parsed.results[0].decode().unwrap().success);
    }

    #[test]
    fn should_expose_distinct_css_classes() {
        assert_ne!(
            ResultStatus::Success.css_class(),
            ResultStatus::Failed.css_class()
        );
    }
}
