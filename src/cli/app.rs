//! Runners for the `run` and `serve` commands

use std::env;
use std::process::ExitCode;

use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::application::ports::ConfigStore;
use crate::application::{Stage, TranscribeCaseCallbacks, TranscribeCaseUseCase};
use crate::domain::case::{CaseRequest, ResultEnvelope};
use crate::domain::config::{
    AppConfig, ServerConfig, ENV_FILE_STORE_URL, ENV_GRAPH_URL, ENV_SERVER_PORT,
    ENV_TRANSCRIPTION_URL,
};
use crate::domain::error::ConfigError;
use crate::infrastructure::{GraphQlCaseGraph, HttpFileStore, HttpTranscriber};

use super::presenter::{stage_message, Presenter};
use super::signals::shutdown_signal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// The use case wired to the HTTP adapters
pub type HttpTranscribeCase = TranscribeCaseUseCase<GraphQlCaseGraph, HttpFileStore, HttpTranscriber>;

/// Build a config from `CASE_*` environment variables
pub fn env_config() -> Result<AppConfig, ConfigError> {
    env_config_from(|name| env::var(name).ok())
}

fn env_config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<AppConfig, ConfigError> {
    let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let port = var(ENV_SERVER_PORT)
        .map(|v| {
            v.trim().parse::<u16>().map_err(|_| ConfigError::ValidationError {
                key: ENV_SERVER_PORT.to_string(),
                message: format!("Invalid port '{}'", v),
            })
        })
        .transpose()?;

    Ok(AppConfig {
        graph_url: var(ENV_GRAPH_URL),
        file_store_url: var(ENV_FILE_STORE_URL),
        transcription_url: var(ENV_TRANSCRIPTION_URL),
        server: port.map(|port| ServerConfig {
            host: None,
            port: Some(port),
        }),
        ..Default::default()
    })
}

/// Load and merge configuration: defaults < file < env < cli
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
) -> Result<AppConfig, ConfigError> {
    let file_config = store.load().await?;

    Ok(AppConfig::defaults()
        .merge(file_config)
        .merge(env_config()?)
        .merge(cli_config))
}

/// Wire the use case to the HTTP adapters, sharing one connection pool
pub fn build_use_case(config: &AppConfig) -> Result<HttpTranscribeCase, ConfigError> {
    let urls = config.service_urls()?;
    let client = reqwest::Client::new();

    Ok(TranscribeCaseUseCase::new(
        GraphQlCaseGraph::with_client(client.clone(), urls.graph),
        HttpFileStore::with_client(client.clone(), urls.file_store),
        HttpTranscriber::with_client(client, urls.transcription, config.transcription_timeout_or_default()),
    ))
}

/// Transcribe one case, printing the result envelope to stdout
pub async fn run_oneshot(config: AppConfig, request: CaseRequest) -> ExitCode {
    let mut presenter = Presenter::new();

    let use_case = match build_use_case(&config) {
        Ok(use_case) => use_case,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.start_spinner("Starting...");
    let spinner = presenter.spinner_handle();
    let size_spinner = spinner.clone();

    let callbacks = TranscribeCaseCallbacks {
        on_stage: Some(Box::new(move |stage: Stage| {
            if let Some(ref s) = spinner {
                s.set_message(stage_message(stage));
            }
        })),
        on_downloaded: Some(Box::new(move |size: &str| {
            if let Some(ref s) = size_spinner {
                s.println(format!("Audio downloaded ({})", size));
            }
        })),
    };

    let envelope: ResultEnvelope = match use_case.execute(&request, &callbacks).await {
        Ok(output) => {
            presenter.spinner_success(&format!(
                "Transcription saved ({} chars from {})",
                output.text.chars().count(),
                output.audio_size
            ));
            ResultEnvelope::ok()
        }
        Err(e) => {
            presenter.spinner_fail(&format!("Failed at {} stage", e.stage()));
            tracing::warn!(stage = %e.stage(), error = %e, "Case transcription failed");
            ResultEnvelope::from(&e)
        }
    };

    match serde_json::to_string(&envelope) {
        Ok(json) => presenter.output(&json),
        Err(e) => {
            presenter.error(&format!("Failed to encode result: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    }

    if envelope.is_success() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Serve the HTTP API until SIGINT or SIGTERM
pub async fn run_server(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let use_case = match build_use_case(&config) {
        Ok(use_case) => use_case,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let router = create_router(AppState::new(use_case));
    let addr = format!("{}:{}", config.host_or_default(), config.port_or_default());

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            presenter.error(&format!("Failed to bind {}: {}", addr, e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    tracing::info!(addr = %addr, "Server listening");
    presenter.info(&format!("Listening on http://{}", addr));

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        presenter.error(&format!("Server error: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    ExitCode::from(EXIT_SUCCESS)
}
