//! Named GraphQL query templates

use std::fmt;

/// Positional placeholder used in template sources
pub const PLACEHOLDER: &str = "%s";

/// GraphQL documents sent to the case graph service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryTemplate {
    /// Doctor → case → audio lookup. Args: doctor id, case id
    DoctorCase,
    /// Transcription write-back mutation. Args: doctor id, case id, text
    UploadTranscription,
}

impl QueryTemplate {
    /// Resource name of the template
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DoctorCase => "get-doctor-case.graphql",
            Self::UploadTranscription => "upload-transcription.graphql",
        }
    }

    /// Multi-line template source
    pub const fn source(&self) -> &'static str {
        match self {
            Self::DoctorCase => include_str!("templates/get-doctor-case.graphql"),
            Self::UploadTranscription => include_str!("templates/upload-transcription.graphql"),
        }
    }
}

impl fmt::Display for QueryTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
