//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, LoggingConfig, ServerConfig, ServiceUrls, ENV_FILE_STORE_URL, ENV_GRAPH_URL,
    ENV_SERVER_PORT, ENV_TRANSCRIPTION_URL,
};
