//! File store port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::AudioData;

/// File store errors
#[derive(Debug, Clone, Error)]
pub enum FileStoreError {
    #[error("File request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to download file: {0}")]
    DownloadFailed(String),
}

/// Port for downloading stored files
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Download the file with the given id.
    async fn download(&self, file_id: &str) -> Result<AudioData, FileStoreError>;
}
