//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::case::CaseRequest;
use crate::domain::config::{AppConfig, ServerConfig};

/// case-transcriber - transcribe the audio attached to a doctor's case
#[derive(Parser, Debug)]
#[command(name = "case-transcriber")]
#[command(version)]
#[command(about = "Fetch a case recording, transcribe it and write the text back to the case")]
#[command(long_about = None)]
pub struct Cli {
    /// Config file path (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "PATH", env = "CASE_TRANSCRIBER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,
    },
    /// Transcribe a single case and print the result envelope
    Run {
        /// Doctor identifier
        #[arg(long, value_name = "ID")]
        doctor_id: String,

        /// Case identifier
        #[arg(long, value_name = "ID")]
        case_id: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Commands {
    /// Config overrides carried by command-line flags
    pub fn config_overrides(&self) -> AppConfig {
        match self {
            Self::Serve { host, port } if host.is_some() || port.is_some() => AppConfig {
                server: Some(ServerConfig {
                    host: host.clone(),
                    port: *port,
                }),
                ..Default::default()
            },
            _ => AppConfig::empty(),
        }
    }

    /// Case request for the `run` subcommand
    pub fn case_request(&self) -> Option<CaseRequest> {
        match self {
            Self::Run { doctor_id, case_id } => {
                Some(CaseRequest::new(doctor_id.clone(), case_id.clone()))
            }
            _ => None,
        }
    }
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "graph_url",
    "file_store_url",
    "transcription_url",
    "transcription_timeout_secs",
    "server.host",
    "server.port",
    "logging.json",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
