//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! the GraphQL case graph, the HTTP file store and transcription engine,
//! the TOML config file and logging setup.

pub mod config;
pub mod file_store;
pub mod graph;
pub mod observability;
pub mod transcription;

// Re-export adapters
pub use config::XdgConfigStore;
pub use file_store::HttpFileStore;
pub use graph::GraphQlCaseGraph;
pub use observability::{init_tracing, TracingConfig};
pub use transcription::HttpTranscriber;
