pub mod health;
pub mod transcribe;

pub use health::{health_handler, HealthResponse};
pub use transcribe::transcribe_offline_handler;
