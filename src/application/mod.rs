//! Application layer - Use cases and port interfaces
//!
//! Contains the case transcription pipeline and trait definitions
//! for external system interactions.

pub mod ports;
pub mod transcribe;

// Re-export use cases
pub use transcribe::{
    Stage, TranscribeCaseCallbacks, TranscribeCaseError, TranscribeCaseOutput,
    TranscribeCaseUseCase, DATA_NOT_FOUND, UPLOAD_FAILED,
};
