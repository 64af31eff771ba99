//! Common error types used across the workspace.
//!
//! The taxonomy mirrors what can go wrong while talking to the backend:
//! transport failures, non-2xx statuses and malformed payloads. Form
//! validation failures are reported through the same enum so callers have a
//! single type to match on.

/// Base error type for every layer of snutz.
#[derive(Debug, thiserror::Error)]
pub enum SnutzError {
    /// User input rejected before any request was issued.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The backend answered with a non-2xx HTTP status.
    #[error("server returned status {0}")]
    Status(u16),

    /// A body (or an embedded JSON string) did not have the expected shape.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A timestamp could not be parsed.
    #[error("{0}")]
    Timestamp(#[from] TimestampError),

    /// The request never produced a response (connection refused, DNS, …).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A template failed to render.
    #[error("failed to render markup: {0}")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A local command could not be started or awaited.
    #[error("failed to run `{program}`: {source}")]
    Process {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Form validation failures, in the order they are checked.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a device")]
    NoDeviceSelected,

    #[error("Please enter a target")]
    NoTarget,
}

/// A timestamp string that is neither RFC 3339 nor a naive ISO-8601 date-time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp `{raw}`")]
pub struct TimestampError {
    pub raw: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_validation_messages_for_the_user() {
        assert_eq!(
            ValidationError::NoDeviceSelected.to_string(),
            "Please select a device"
        );
        assert_eq!(ValidationError::NoTarget.to_string(), "Please enter a target");
    }

    #[test]
    fn should_include_status_code_in_message() {
        assert_eq!(SnutzError::Status(500).to_string(), "server returned status 500");
    }

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: SnutzError = ValidationError::NoTarget.into();
        assert!(matches!(
            err,
            SnutzError::Validation(ValidationError::NoTarget)
        ));
    }

    #[test]
    fn should_name_program_when_process_fails() {
        let err = SnutzError::Process {
            program: "ping".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to run `ping`: "));
    }

    #[test]
    fn should_convert_json_error_to_payload() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err: SnutzError = json_err.into();
        assert!(matches!(err, SnutzError::Payload(_)));
    }
}
