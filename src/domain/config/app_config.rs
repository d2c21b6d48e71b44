//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Environment variable overriding `graph_url`
pub const ENV_GRAPH_URL: &str = "CASE_GRAPH_URL";
/// Environment variable overriding `file_store_url`
pub const ENV_FILE_STORE_URL: &str = "CASE_FILE_STORE_URL";
/// Environment variable overriding `transcription_url`
pub const ENV_TRANSCRIPTION_URL: &str = "CASE_TRANSCRIPTION_URL";
/// Environment variable overriding `server.port`
pub const ENV_SERVER_PORT: &str = "CASE_SERVER_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TRANSCRIPTION_TIMEOUT_SECS: u64 = 150;

/// HTTP server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub graph_url: Option<String>,
    pub file_store_url: Option<String>,
    pub transcription_url: Option<String>,
    pub transcription_timeout_secs: Option<u64>,
    pub server: Option<ServerConfig>,
    pub logging: Option<LoggingConfig>,
}

/// Resolved endpoints of the three collaborating services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrls {
    pub graph: String,
    pub file_store: String,
    pub transcription: String,
}

impl AppConfig {
    /// Create config with default values. Service URLs have no default.
    pub fn defaults() -> Self {
        Self {
            graph_url: None,
            file_store_url: None,
            transcription_url: None,
            transcription_timeout_secs: Some(DEFAULT_TRANSCRIPTION_TIMEOUT_SECS),
            server: Some(ServerConfig {
                host: Some(DEFAULT_HOST.to_string()),
                port: Some(DEFAULT_PORT),
            }),
            logging: Some(LoggingConfig { json: Some(false) }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            graph_url: other.graph_url.or(self.graph_url),
            file_store_url: other.file_store_url.or(self.file_store_url),
            transcription_url: other.transcription_url.or(self.transcription_url),
            transcription_timeout_secs: other
                .transcription_timeout_secs
                .or(self.transcription_timeout_secs),
            server: Self::merge_server_config(self.server, other.server),
            logging: Self::merge_logging_config(self.logging, other.logging),
        }
    }

    fn merge_server_config(
        base: Option<ServerConfig>,
        other: Option<ServerConfig>,
    ) -> Option<ServerConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(ServerConfig {
                host: o.host.or(b.host),
                port: o.port.or(b.port),
            }),
        }
    }

    fn merge_logging_config(
        base: Option<LoggingConfig>,
        other: Option<LoggingConfig>,
    ) -> Option<LoggingConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(LoggingConfig {
                json: o.json.or(b.json),
            }),
        }
    }

    /// Get all three service URLs, failing on the first one that is unset
    pub fn service_urls(&self) -> Result<ServiceUrls, ConfigError> {
        Ok(ServiceUrls {
            graph: Self::required(&self.graph_url, "graph_url", ENV_GRAPH_URL)?,
            file_store: Self::required(&self.file_store_url, "file_store_url", ENV_FILE_STORE_URL)?,
            transcription: Self::required(
                &self.transcription_url,
                "transcription_url",
                ENV_TRANSCRIPTION_URL,
            )?,
        })
    }

    fn required(
        value: &Option<String>,
        key: &'static str,
        env: &'static str,
    ) -> Result<String, ConfigError> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or(ConfigError::MissingValue { key, env })
    }

    /// Get the transcription request timeout, or 150s if not set
    pub fn transcription_timeout_or_default(&self) -> Duration {
        Duration::from_secs(
            self.transcription_timeout_secs
                .unwrap_or(DEFAULT_TRANSCRIPTION_TIMEOUT_SECS),
        )
    }

    /// Get server host, or "0.0.0.0" if not set
    pub fn host_or_default(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
    }

    /// Get server port, or 8080 if not set
    pub fn port_or_default(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(DEFAULT_PORT)
    }

    /// Get JSON log format setting, or false if not set
    pub fn log_json_or_default(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }
}
