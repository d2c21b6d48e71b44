//! Config command handler

use reqwest::Url;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, LoggingConfig, ServerConfig};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    set_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    presenter.output(get_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, get_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Read a key's stored value as display text
fn get_value(config: &AppConfig, key: &str) -> Option<String> {
    let server = config.server.as_ref();
    match key {
        "graph_url" => config.graph_url.clone(),
        "file_store_url" => config.file_store_url.clone(),
        "transcription_url" => config.transcription_url.clone(),
        "transcription_timeout_secs" => config.transcription_timeout_secs.map(|n| n.to_string()),
        "server.host" => server.and_then(|s| s.host.clone()),
        "server.port" => server.and_then(|s| s.port).map(|p| p.to_string()),
        "logging.json" => config
            .logging
            .as_ref()
            .and_then(|l| l.json)
            .map(|b| b.to_string()),
        _ => None,
    }
}

/// Validate and store a value under `key`
fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "graph_url" => config.graph_url = Some(parse_url(key, value)?),
        "file_store_url" => config.file_store_url = Some(parse_url(key, value)?),
        "transcription_url" => config.transcription_url = Some(parse_url(key, value)?),
        "transcription_timeout_secs" => {
            let secs: u64 = parse_number(key, value)?;
            if secs == 0 {
                return Err(invalid(key, "Timeout must be at least 1 second"));
            }
            config.transcription_timeout_secs = Some(secs);
        }
        "server.host" => {
            if value.trim().is_empty() {
                return Err(invalid(key, "Host must not be empty"));
            }
            config
                .server
                .get_or_insert_with(ServerConfig::default)
                .host = Some(value.trim().to_string());
        }
        "server.port" => {
            config.server.get_or_insert_with(ServerConfig::default).port =
                Some(parse_number(key, value)?);
        }
        "logging.json" => {
            let json = parse_bool(value)
                .map_err(|_| invalid(key, "Value must be 'true' or 'false'"))?;
            config.logging.get_or_insert_with(LoggingConfig::default).json = Some(json);
        }
        _ => return Err(invalid(key, "Unknown key")),
    }
    Ok(())
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Accept absolute http(s) URLs only
fn parse_url(key: &str, value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|e| invalid(key, format!("Invalid URL '{}': {}", value, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(value.trim().to_string()),
        scheme => Err(invalid(
            key,
            format!("Unsupported scheme '{}'. Use http or https", scheme),
        )),
    }
}

fn parse_number<N: std::str::FromStr>(key: &str, value: &str) -> Result<N, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(key, format!("Invalid number '{}'", value)))
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn set_url_accepts_http_and_https() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "graph_url", "http://graph:8080/graphql").unwrap();
        set_value(&mut config, "file_store_url", "https://files/download?fileId=").unwrap();
        assert_eq!(config.graph_url.as_deref(), Some("http://graph:8080/graphql"));
        assert_eq!(
            config.file_store_url.as_deref(),
            Some("https://files/download?fileId=")
        );
    }

    #[test]
    fn set_url_rejects_other_schemes() {
        let mut config = AppConfig::empty();
        let err = set_value(&mut config, "transcription_url", "ftp://asr").unwrap_err();
        assert!(err.to_string().contains("ftp"));
        assert!(config.transcription_url.is_none());
    }

    #[test]
    fn set_url_rejects_garbage() {
        let mut config = AppConfig::empty();
        assert!(set_value(&mut config, "graph_url", "not a url").is_err());
    }

    #[test]
    fn set_port_and_timeout() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "server.port", "9090").unwrap();
        set_value(&mut config, "transcription_timeout_secs", "30").unwrap();
        assert_eq!(config.port_or_default(), 9090);
        assert_eq!(config.transcription_timeout_secs, Some(30));
    }

    #[test]
    fn set_port_rejects_out_of_range() {
        let mut config = AppConfig::empty();
        assert!(set_value(&mut config, "server.port", "70000").is_err());
        assert!(set_value(&mut config, "server.port", "abc").is_err());
    }

    #[test]
    fn set_timeout_rejects_zero() {
        let mut config = AppConfig::empty();
        assert!(set_value(&mut config, "transcription_timeout_secs", "0").is_err());
    }

    #[test]
    fn set_host_keeps_existing_port() {
        let mut config = AppConfig::defaults();
        set_value(&mut config, "server.host", "127.0.0.1").unwrap();
        assert_eq!(config.host_or_default(), "127.0.0.1");
        assert_eq!(config.port_or_default(), 8080);
    }

    #[test]
    fn set_logging_json() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "logging.json", "yes").unwrap();
        assert_eq!(get_value(&config, "logging.json").as_deref(), Some("true"));
        assert!(set_value(&mut config, "logging.json", "maybe").is_err());
    }

    #[test]
    fn get_value_unset_is_none() {
        let config = AppConfig::empty();
        for key in VALID_CONFIG_KEYS {
            assert!(get_value(&config, key).is_none(), "{key} should be unset");
        }
    }

    #[test]
    fn unknown_key_rejected() {
        let err = ensure_known_key("api_key").unwrap_err();
        assert!(err.to_string().contains("graph_url"));
    }
}
