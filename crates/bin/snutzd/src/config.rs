//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `snutz.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;
use snutz_adapter_http_reqwest::DEFAULT_BASE_URL;
use snutz_app::poller::DEFAULT_POLL_INTERVAL;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Backend API settings.
    pub api: ApiConfig,
    /// Polling settings.
    pub poll: PollConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Backend API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend, without trailing path.
    pub base_url: String,
}

/// Poller configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between two refreshes of the dashboard regions.
    pub interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `snutz.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("snutz.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("SNUTZ_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("SNUTZ_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some((host, port)) = lookup("SNUTZ_BIND")
            .as_deref()
            .and_then(|val| val.rsplit_once(':'))
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("SNUTZ_API_URL") {
            self.api.base_url = val;
        }
        if let Some(secs) = lookup("SNUTZ_POLL_INTERVAL").and_then(|val| val.parse().ok()) {
            self.poll.interval_secs = secs;
        }
        if let Some(val) = lookup("SNUTZ_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api base url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the delay between two poll cycles.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll.interval_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_POLL_INTERVAL.as_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "snutzd=info,snutz=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
