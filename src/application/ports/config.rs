//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for the persisted configuration file
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration.
    /// A missing file yields an empty config rather than an error.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Write the configuration, creating parent directories as needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write a file holding the defaults. Fails if one already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
