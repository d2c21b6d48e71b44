//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the runners for the `run`, `serve` and `config` commands.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{
    build_use_case, load_merged_config, run_oneshot, run_server, EXIT_ERROR, EXIT_SUCCESS,
};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
