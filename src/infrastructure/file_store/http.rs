//! HTTP file store adapter

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::application::ports::{FileStore, FileStoreError};
use crate::domain::transcription::AudioData;

/// File store that serves files at `<base_url><file_id>`
pub struct HttpFileStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFileStore {
    /// Create an adapter for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an adapter sharing an existing client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Build the download URL. The id is appended as-is.
    fn file_url(&self, file_id: &str) -> String {
        format!("{}{}", self.base_url, file_id)
    }
}

#[async_trait]
impl FileStore for HttpFileStore {
    async fn download(&self, file_id: &str) -> Result<AudioData, FileStoreError> {
        let url = self.file_url(file_id);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "*/*")
            .send()
            .await
            .map_err(|e| FileStoreError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let err = FileStoreError::DownloadFailed(status.to_string());
            tracing::error!(file_id = %file_id, "{}", err);
            return Err(err);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FileStoreError::RequestFailed(e.to_string()))?;

        Ok(AudioData::new(bytes.to_vec()))
    }
}
