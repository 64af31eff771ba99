//! Agent configuration: `snutz-agent.toml` with environment variable overrides.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device identity and backend location.
    pub agent: AgentConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Identity of this device and where to report it.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Identifier the device registers under.
    pub device_id: String,
    /// Human-readable device name.
    pub name: String,
    /// Base URL of the backend.
    pub server_url: String,
    /// Seconds between two heartbeats.
    pub heartbeat_interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `snutz-agent.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("snutz-agent.toml")?;
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
        if let Some(val) = lookup("SNUTZ_DEVICE_ID") {
            self.agent.device_id = val;
        }
        if let Some(val) = lookup("SNUTZ_DEVICE_NAME") {
            self.agent.name = val;
        }
        if let Some(val) = lookup("SNUTZ_SERVER_URL") {
            self.agent.server_url = val;
        }
        if let Some(secs) = lookup("SNUTZ_HEARTBEAT_INTERVAL").and_then(|val| val.parse().ok()) {
            self.agent.heartbeat_interval_secs = secs;
        }
        if let Some(val) = lookup("SNUTZ_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.agent.device_id.is_empty() {
            return Err(ConfigError::Validation(
                "device_id must not be empty".to_string(),
            ));
        }
        if self.agent.heartbeat_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "heartbeat interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the delay between two heartbeats.
    #[must_use]
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.agent.heartbeat_interval_secs)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            device_id: "test-1".to_string(),
            name: "Test".to_string(),
            server_url: "http://0.0.0.0:8000".to_string(),
            heartbeat_interval_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "snutz_agent=info,snutz=info".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.agent.device_id, "test-1");
        assert_eq!(config.agent.name, "Test");
        assert_eq!(config.agent.server_url, "http://0.0.0.0:8000");
        assert_eq!(config.heartbeat_interval(), Duration::from_secs(30));
    }

    #[test]
    fn should_parse_agent_section_with_defaults() {
        let toml = "
            [agent]
            device_id = 'rack-4'
            name = 'Rack four'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.agent.device_id, "rack-4");
        assert_eq!(config.agent.name, "Rack four");
        assert_eq!(config.agent.heartbeat_interval_secs, 30);
    }

    #[test]
    fn should_apply_overrides_when_variables_set() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "SNUTZ_SERVER_URL" => Some("http://backend:8000".to_string()),
            "SNUTZ_HEARTBEAT_INTERVAL" => Some("5".to_string()),
            _ => None,
        });
        assert_eq!(config.agent.server_url, "http://backend:8000");
        assert_eq!(config.agent.heartbeat_interval_secs, 5);
        assert_eq!(config.agent.device_id, "test-1");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.agent.device_id, "test-1");
    }

    #[test]
    fn should_reject_empty_device_id() {
        let mut config = Config::default();
        config.agent.device_id.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_heartbeat_interval() {
        let mut config = Config::default();
        config.agent.heartbeat_interval_secs = 0;
        assert!(config.validate().is_err());
    }
}
