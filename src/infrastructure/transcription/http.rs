//! HTTP transcription engine adapter

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::transcription::AudioData;

/// Multipart field carrying the audio
const AUDIO_FIELD: &str = "audio";

/// File name sent with the audio part
const AUDIO_FILE_NAME: &str = "trans";

/// Content type sent with the audio part
const AUDIO_MIME_TYPE: &str = "audio/*";

/// Default request timeout. Transcription of long recordings is slow.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(150);

/// Transcriber posting audio as a multipart upload and reading plain text back
pub struct HttpTranscriber {
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpTranscriber {
    /// Create a transcriber for the given endpoint
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url, DEFAULT_TIMEOUT)
    }

    /// Create a transcriber sharing an existing client, with a custom timeout
    pub fn with_client(client: reqwest::Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            client,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the multipart form
    fn build_form(audio: &AudioData) -> Result<multipart::Form, TranscriptionError> {
        let part = multipart::Part::bytes(audio.data().to_vec())
            .file_name(AUDIO_FILE_NAME)
            .mime_str(AUDIO_MIME_TYPE)
            .map_err(|e| TranscriptionError::RequestFailed(format!("mime: {}", e)))?;

        Ok(multipart::Form::new().part(AUDIO_FIELD, part))
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError> {
        let form = Self::build_form(audio)?;

        tracing::debug!(
            url = %self.url,
            size = %audio.human_readable_size(),
            "Sending audio to transcription engine"
        );

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let err = TranscriptionError::ApiError(status.to_string());
            tracing::error!("{}", err);
            return Err(err);
        }

        // Returned verbatim: the text is written back byte-for-byte
        response
            .text()
            .await
            .map_err(|e| TranscriptionError::ParseError(e.to_string()))
    }
}
