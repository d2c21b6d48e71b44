//! Domain error types

use thiserror::Error;

/// Error when an inbound case request is missing an identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required identifier")]
pub struct ValidationError {
    /// Names of the blank fields, in request order
    pub missing: Vec<&'static str>,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),

    #[error("Missing {key}. Set {env} or run 'case-transcriber config set {key} <url>'")]
    MissingValue { key: &'static str, env: &'static str },
}
