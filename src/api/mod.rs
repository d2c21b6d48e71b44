//! HTTP API layer
//!
//! Exposes the transcribe case use case over axum.

pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use openapi::ApiDoc;
pub use router::create_router;
pub use state::AppState;
