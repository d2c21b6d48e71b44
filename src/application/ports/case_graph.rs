//! Case graph port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::case::GraphResponse;
use crate::domain::payload::TemplateError;

/// Case graph errors
#[derive(Debug, Clone, Error)]
pub enum GraphError {
    #[error("Failed to render request payload: {0}")]
    Payload(#[from] TemplateError),

    #[error("Graph request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to get doctor information: {0}")]
    LookupFailed(String),

    #[error("Failed to parse graph response: {0}")]
    ParseError(String),
}

/// Port for the case graph query service
#[async_trait]
pub trait CaseGraph: Send + Sync {
    /// Look up a doctor's case with its audio attachments.
    ///
    /// # Returns
    /// `None` when the service answered with a JSON `null` body,
    /// otherwise the decoded response (whose `data` may still be absent).
    async fn fetch_case(
        &self,
        doctor_id: &str,
        case_id: &str,
    ) -> Result<Option<GraphResponse>, GraphError>;

    /// Write the transcribed text back onto the case.
    ///
    /// # Returns
    /// Whether the service accepted the mutation. A non-success status is
    /// `Ok(false)`; only transport faults are errors.
    async fn upload_transcription(
        &self,
        doctor_id: &str,
        case_id: &str,
        text: &str,
    ) -> Result<bool, GraphError>;
}
