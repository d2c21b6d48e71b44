//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::AudioData;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Transcription request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to create transcription request: {0}")]
    ApiError(String),

    #[error("Failed to read transcription response: {0}")]
    ParseError(String),
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe audio data to text.
    ///
    /// # Arguments
    /// * `audio` - The audio data to transcribe
    ///
    /// # Returns
    /// The transcribed text exactly as returned by the engine
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError>;
}
