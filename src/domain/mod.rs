//! Domain layer - Core business logic
//!
//! Contains the case graph model, file id extraction, payload rendering,
//! value objects, and domain errors.
//! This layer has no dependencies on external systems.

pub mod case;
pub mod config;
pub mod error;
pub mod payload;
pub mod transcription;

// Re-export common types
pub use case::{
    extract_file_id, CaseRequest, GraphData, GraphResponse, InformationNotFound, Relation,
    ResultEnvelope,
};
pub use config::AppConfig;
pub use error::*;
pub use payload::{render_payload, QueryTemplate, TemplateError};
pub use transcription::AudioData;
