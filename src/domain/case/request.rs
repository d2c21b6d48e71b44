//! Inbound case request value object

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::ValidationError;

/// Identifies the doctor and the case whose audio should be transcribed.
///
/// Missing keys deserialize as empty strings so that an incomplete body
/// reaches validation instead of being rejected by the JSON extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseRequest {
    #[serde(default)]
    #[schema(example = "D1")]
    pub doctor_id: String,
    #[serde(default)]
    #[schema(example = "C1")]
    pub case_id: String,
}

impl CaseRequest {
    /// Create a request from the two identifiers
    pub fn new(doctor_id: impl Into<String>, case_id: impl Into<String>) -> Self {
        Self {
            doctor_id: doctor_id.into(),
            case_id: case_id.into(),
        }
    }

    /// Reject the request if either identifier is blank (empty or whitespace).
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [
            ("doctorId", self.doctor_id.as_str()),
            ("caseId", self.case_id.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}
