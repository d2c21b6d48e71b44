//! Uniform response envelope for the transcription operation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success status code
pub const SUCCESS: u16 = 200;
/// Default failure status code
pub const FAIL: u16 = 500;

const DEFAULT_SUCCESS_MESSAGE: &str = "Operation succeeded";
const DEFAULT_FAIL_MESSAGE: &str = "Operation failed";

/// `{ code, msg, data? }` wrapper returned to callers.
/// A failure never carries `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[aliases(TranscribeResult = ResultEnvelope<String>)]
pub struct ResultEnvelope<T = String> {
    pub code: u16,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResultEnvelope<T> {
    /// Success without payload
    pub fn ok() -> Self {
        Self::build(SUCCESS, DEFAULT_SUCCESS_MESSAGE, None)
    }

    /// Success carrying a payload
    pub fn ok_with(data: T) -> Self {
        Self::build(SUCCESS, DEFAULT_SUCCESS_MESSAGE, Some(data))
    }

    /// Failure with the default code
    pub fn fail(msg: impl Into<String>) -> Self {
        Self::build(FAIL, msg, None)
    }

    /// Failure with a caller-supplied code
    pub fn fail_with_code(code: u16, msg: impl Into<String>) -> Self {
        Self::build(code, msg, None)
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS
    }

    fn build(code: u16, msg: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data,
        }
    }
}

impl<T> Default for ResultEnvelope<T> {
    fn default() -> Self {
        Self::build(FAIL, DEFAULT_FAIL_MESSAGE, None)
    }
}
