//! Logging setup

mod init_tracing;

pub use init_tracing::{init_tracing, TracingConfig, DEFAULT_FILTER, QUIET_FILTER};
