//! case-transcriber entry point

use std::process::ExitCode;

use clap::Parser;

use case_transcriber::cli::{
    app::{load_merged_config, run_oneshot, run_server, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use case_transcriber::infrastructure::{init_tracing, TracingConfig, XdgConfigStore};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();
    let store = XdgConfigStore::from_override(cli.config.clone());

    if let Commands::Config { action } = cli.command {
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let config = match load_merged_config(&store, cli.command.config_overrides()).await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match cli.command.case_request() {
        Some(request) => {
            init_tracing(TracingConfig::quiet(&config));
            run_oneshot(config, request).await
        }
        None => {
            init_tracing(TracingConfig::server(&config));
            run_server(config).await
        }
    }
}
