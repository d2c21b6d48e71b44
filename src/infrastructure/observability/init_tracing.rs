use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::config::AppConfig;

/// Filter used by the server when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,case_transcriber=debug,tower_http=debug";

/// Filter for one-shot commands, which report progress on their own
pub const QUIET_FILTER: &str = "warn";

/// Configuration for tracing initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub json_format: bool,
    pub default_filter: &'static str,
}

impl TracingConfig {
    /// Server logging, format taken from config
    pub fn server(config: &AppConfig) -> Self {
        Self {
            json_format: config.log_json_or_default(),
            default_filter: DEFAULT_FILTER,
        }
    }

    /// One-shot logging: warnings and errors only unless `RUST_LOG` says otherwise
    pub fn quiet(config: &AppConfig) -> Self {
        Self {
            json_format: config.log_json_or_default(),
            default_filter: QUIET_FILTER,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            json_format: false,
            default_filter: DEFAULT_FILTER,
        }
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// reserved for command output.
///
/// A second call is a no-op.
pub fn init_tracing(config: TracingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_filter));

    let result = if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!(json_format = config.json_format, "Tracing initialized");
    }
}
