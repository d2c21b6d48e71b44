//! TOML config file store

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Directory name under the platform config dir
const APP_DIR: &str = "case-transcriber";

const FILE_NAME: &str = "config.toml";

/// Config store reading `<config_dir>/case-transcriber/config.toml`,
/// or an explicit path given with `--config`.
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join(APP_DIR);

        Self {
            path: config_dir.join(FILE_NAME),
        }
    }

    /// Use an explicit file path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the explicit path if given, the platform default otherwise
    pub fn from_override(path: Option<PathBuf>) -> Self {
        path.map(Self::with_path).unwrap_or_default()
    }

    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        self.save(&AppConfig::defaults()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ServerConfig;

    #[test]
    fn default_path_is_under_app_dir() {
        let path = XdgConfigStore::new().path();
        assert!(path.to_string_lossy().contains("case-transcriber"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn override_path_wins() {
        let store = XdgConfigStore::from_override(Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(store.path(), PathBuf::from("/custom/config.toml"));
    }

    #[test]
    fn parse_toml_with_sections() {
        let content = r#"
graph_url = "http://graph/graphql"
file_store_url = "http://files/file/"
transcription_timeout_secs = 60

[server]
port = 9090

[logging]
json = true
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.graph_url.as_deref(), Some("http://graph/graphql"));
        assert_eq!(config.file_store_url.as_deref(), Some("http://files/file/"));
        assert!(config.transcription_url.is_none());
        assert_eq!(config.transcription_timeout_secs, Some(60));
        assert_eq!(config.port_or_default(), 9090);
        assert_eq!(config.host_or_default(), "0.0.0.0");
        assert!(config.log_json_or_default());
    }

    #[test]
    fn parse_toml_rejects_wrong_type() {
        let err = XdgConfigStore::parse_toml("transcription_timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn to_toml_keeps_values() {
        let config = AppConfig {
            transcription_url: Some("http://asr/transcribe".to_string()),
            server: Some(ServerConfig {
                host: Some("127.0.0.1".to_string()),
                port: None,
            }),
            ..Default::default()
        };

        let parsed = XdgConfigStore::parse_toml(&XdgConfigStore::to_toml(&config).unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[tokio::test]
    async fn init_then_load_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested").join("config.toml"));

        store.init().await.unwrap();
        assert!(store.exists());
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());

        let err = store.init().await.unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
    }
}
