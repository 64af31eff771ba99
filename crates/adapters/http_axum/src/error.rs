//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use snutz_domain::error::SnutzError;

/// Maps a [`SnutzError`] raised while serving a page to a plain 500.
///
/// Form problems travel as alerts through the redirect and never end up here.
pub struct DashboardError(SnutzError);

impl From<SnutzError> for DashboardError {
    fn from(err: SnutzError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "failed to render dashboard");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
            .into_response()
    }
}
