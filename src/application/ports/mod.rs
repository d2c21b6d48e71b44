//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod case_graph;
pub mod config;
pub mod file_store;
pub mod transcriber;

// Re-export common types
pub use case_graph::{CaseGraph, GraphError};
pub use config::ConfigStore;
pub use file_store::{FileStore, FileStoreError};
pub use transcriber::{Transcriber, TranscriptionError};
