//! Transcribe case use case
//!
//! Validate → query → extract → download → transcribe → write back.
//! Every stage either feeds the next one or ends the run; nothing is retried
//! and a failed write-back discards the transcription.

use std::fmt;

use thiserror::Error;

use crate::domain::case::{extract_file_id, CaseRequest, InformationNotFound, ResultEnvelope};
use crate::domain::error::ValidationError;

use super::ports::{
    CaseGraph, FileStore, FileStoreError, GraphError, Transcriber, TranscriptionError,
};

/// Query returned no usable data
pub const DATA_NOT_FOUND: &str = "invalid case id or data not found";
/// Write-back was rejected by the graph service
pub const UPLOAD_FAILED: &str = "failed to upload transcription text";

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validate,
    Query,
    Extract,
    Download,
    Transcribe,
    WriteBack,
}

impl Stage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Query => "query",
            Self::Extract => "extract",
            Self::Download => "download",
            Self::Transcribe => "transcribe",
            Self::WriteBack => "write-back",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors from the transcribe case use case
#[derive(Debug, Error)]
pub enum TranscribeCaseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Case lookup error: {0}")]
    Lookup(GraphError),

    #[error("{}", DATA_NOT_FOUND)]
    CaseDataNotFound,

    #[error(transparent)]
    NotFound(#[from] InformationNotFound),

    #[error("File processing error: {0}")]
    Download(#[from] FileStoreError),

    #[error("File processing error: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("{}", UPLOAD_FAILED)]
    UploadRejected,

    #[error("failed to upload transcription text: {0}")]
    Upload(GraphError),
}

impl TranscribeCaseError {
    /// Stage that ended the run
    pub fn stage(&self) -> Stage {
        match self {
            Self::Validation(_) => Stage::Validate,
            Self::Lookup(_) | Self::CaseDataNotFound => Stage::Query,
            Self::NotFound(_) => Stage::Extract,
            Self::Download(_) => Stage::Download,
            Self::Transcription(_) => Stage::Transcribe,
            Self::UploadRejected | Self::Upload(_) => Stage::WriteBack,
        }
    }
}

impl From<&TranscribeCaseError> for ResultEnvelope {
    fn from(err: &TranscribeCaseError) -> Self {
        ResultEnvelope::fail(err.to_string())
    }
}

/// Output from a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribeCaseOutput {
    /// File id the audio was downloaded from
    pub file_id: String,
    /// The text written back to the case
    pub text: String,
    /// Audio file size in human-readable format
    pub audio_size: String,
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct TranscribeCaseCallbacks {
    /// Called when a stage starts
    pub on_stage: Option<Box<dyn Fn(Stage) + Send + Sync>>,
    /// Called after the download with the audio size
    pub on_downloaded: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

impl TranscribeCaseCallbacks {
    fn stage(&self, stage: Stage) {
        tracing::debug!(stage = %stage, "Pipeline stage started");
        if let Some(ref cb) = self.on_stage {
            cb(stage);
        }
    }
}

/// One-case transcription use case
pub struct TranscribeCaseUseCase<G, F, T>
where
    G: CaseGraph,
    F: FileStore,
    T: Transcriber,
{
    graph: G,
    file_store: F,
    transcriber: T,
}

impl<G, F, T> TranscribeCaseUseCase<G, F, T>
where
    G: CaseGraph,
    F: FileStore,
    T: Transcriber,
{
    /// Create a new use case instance
    pub fn new(graph: G, file_store: F, transcriber: T) -> Self {
        Self {
            graph,
            file_store,
            transcriber,
        }
    }

    /// Execute the pipeline for one case
    pub async fn execute(
        &self,
        request: &CaseRequest,
        callbacks: &TranscribeCaseCallbacks,
    ) -> Result<TranscribeCaseOutput, TranscribeCaseError> {
        callbacks.stage(Stage::Validate);
        request.validate()?;
        let doctor_id = request.doctor_id.as_str();
        let case_id = request.case_id.as_str();

        callbacks.stage(Stage::Query);
        let response = self
            .graph
            .fetch_case(doctor_id, case_id)
            .await
            .map_err(TranscribeCaseError::Lookup)?;
        let data = response
            .and_then(|r| r.data)
            .ok_or(TranscribeCaseError::CaseDataNotFound)?;

        callbacks.stage(Stage::Extract);
        let file_id = extract_file_id(&data)?;

        callbacks.stage(Stage::Download);
        let audio = self.file_store.download(&file_id).await?;
        let audio_size = audio.human_readable_size();
        tracing::info!(file_id = %file_id, size = %audio_size, "Audio downloaded");
        if let Some(ref cb) = callbacks.on_downloaded {
            cb(&audio_size);
        }

        callbacks.stage(Stage::Transcribe);
        let text = self.transcriber.transcribe(&audio).await?;
        tracing::info!(chars = text.len(), "Audio transcribed");

        callbacks.stage(Stage::WriteBack);
        let accepted = self
            .graph
            .upload_transcription(doctor_id, case_id, &text)
            .await
            .map_err(TranscribeCaseError::Upload)?;
        if !accepted {
            return Err(TranscribeCaseError::UploadRejected);
        }

        Ok(TranscribeCaseOutput {
            file_id,
            text,
            audio_size,
        })
    }

    /// Execute the pipeline and map the outcome to a response envelope.
    /// Success carries no payload; failure carries the error message.
    pub async fn handle(&self, request: &CaseRequest) -> ResultEnvelope {
        match self.execute(request, &TranscribeCaseCallbacks::default()).await {
            Ok(output) => {
                tracing::info!(
                    doctor_id = %request.doctor_id,
                    case_id = %request.case_id,
                    file_id = %output.file_id,
                    "Case transcription uploaded"
                );
                ResultEnvelope::ok()
            }
            Err(TranscribeCaseError::Validation(e)) => {
                tracing::warn!(missing = ?e.missing, "Rejected case request");
                ResultEnvelope::fail(e.to_string())
            }
            Err(e) => {
                tracing::warn!(
                    doctor_id = %request.doctor_id,
                    case_id = %request.case_id,
                    stage = %e.stage(),
                    error = %e,
                    "Case transcription failed"
                );
                ResultEnvelope::from(&e)
            }
        }
    }
}
