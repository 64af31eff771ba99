//! reqwest-backed implementation of the backend ports.

use reqwest::{Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use snutz_app::ports::{DashboardApi, DeviceRegistry};
use snutz_domain::command::CommandRequest;
use snutz_domain::device::Device;
use snutz_domain::error::SnutzError;
use snutz_domain::test_result::TestResults;
use snutz_domain::time::{Timestamp, parse_timestamp};

use crate::error::HttpError;

/// Where the backend listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Body of `GET /devices`.
#[derive(Deserialize)]
struct DevicesResponse {
    devices: Vec<Device>,
}

/// Body of `POST /devices/{id}/heartbeat`.
#[derive(Deserialize)]
struct HeartbeatResponse {
    last_seen: String,
}

/// JSON-over-HTTP client for the snutz backend.
///
/// Requests carry no timeout and are never retried.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:8000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The base URL every path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// The base URL with each of `segments` appended as one percent-encoded
    /// path segment.
    fn segment_url(&self, segments: &[&str]) -> Result<Url, HttpError> {
        let invalid =
            |source: Box<dyn std::error::Error + Send + Sync>| HttpError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source,
            };
        let mut url = Url::parse(&self.base_url).map_err(|err| invalid(err.into()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let response = self.client.get(self.url(path)).send().await?;
        let body = check_status(response)?.text().await?;
        tracing::trace!(path, bytes = body.len(), "response received");
        Ok(serde_json::from_str(&body)?)
    }
}

/// Reject non-2xx responses.
fn check_status(response: Response) -> Result<Response, HttpError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(HttpError::Status(status.as_u16()))
    }
}

impl DashboardApi for HttpBackend {
    async fn list_devices(&self) -> Result<Vec<Device>, SnutzError> {
        let body: DevicesResponse = self.get_json("/devices").await?;
        Ok(body.devices)
    }

    async fn list_test_results(&self) -> Result<TestResults, SnutzError> {
        Ok(self.get_json("/tests/results").await?)
    }

    async fn create_command(&self, request: &CommandRequest) -> Result<(), SnutzError> {
        let parameters = request.parameters_json()?;
        let response = self
            .client
            .post(self.url("/commands/create"))
            .query(&[
                ("device_id", request.device_id.as_str()),
                ("command_type", request.command_type.as_str()),
                ("parameters", parameters.as_str()),
            ])
            .send()
            .await
            .map_err(HttpError::from)?;
        check_status(response)?;
        Ok(())
    }
}

impl DeviceRegistry for HttpBackend {
    async fn register(&self, device_id: &str, name: &str) -> Result<(), SnutzError> {
        let response = self
            .client
            .post(self.url("/devices/register"))
            .query(&[("device_id", device_id), ("name", name)])
            .send()
            .await
            .map_err(HttpError::from)?;
        let body = check_status(response)?
            .text()
            .await
            .map_err(HttpError::from)?;
        tracing::debug!(%body, "registration response");
        Ok(())
    }

    async fn heartbeat(&self, device_id: &str) -> Result<Timestamp, SnutzError> {
        let url = self.segment_url(&["devices", device_id, "heartbeat"])?;
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(HttpError::from)?;
        let body = check_status(response)?
            .text()
            .await
            .map_err(HttpError::from)?;
        let ack: HeartbeatResponse = serde_json::from_str(&body)?;
        Ok(parse_timestamp(&ack.last_seen)?)
    }
}
