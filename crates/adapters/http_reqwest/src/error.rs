//! HTTP adapter error types.

use snutz_domain::error::SnutzError;

/// Errors specific to the reqwest adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The body was not the JSON document we expected.
    #[error("failed to parse response body")]
    Body(#[from] serde_json::Error),

    /// The configured base URL cannot have path segments appended.
    #[error("invalid base URL `{url}`")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<HttpError> for SnutzError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Status(code) => Self::Status(code),
            HttpError::Body(err) => Self::Payload(err),
            HttpError::Request(err) => Self::Transport(Box::new(err)),
            other @ HttpError::InvalidBaseUrl { .. } => Self::Transport(Box::new(other)),
        }
    }
}
