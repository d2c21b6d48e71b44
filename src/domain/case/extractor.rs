//! File identifier extraction from a case graph response
//!
//! The walk takes the first edge at every level and never searches further:
//! a doctor has one active case and a case has one active audio attachment.

use std::fmt;

use thiserror::Error;

use super::graph::{AudioNode, CaseNode, Connection, DoctorNode, GraphData, Relation};

/// Doctor id did not match any doctor
pub const DOCTOR_NOT_FOUND: &str = "The doctor id entered is incorrect and the doctor cannot be found";
/// Case id did not match any case of the doctor
pub const CASE_NOT_FOUND: &str = "The case id entered is incorrect and the case cannot be found";
/// The case has no usable audio file id
pub const AUDIO_FILE_NOT_SET: &str = "The fileId is not set";

/// How a relation failed to yield a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationGap {
    /// Relation missing or `null`
    Absent,
    /// Relation returned with zero edges
    NoEdges,
    /// Audio node returned with an empty `fileId`
    EmptyFileId,
}

impl fmt::Display for RelationGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Absent => "absent",
            Self::NoEdges => "no edges",
            Self::EmptyFileId => "empty fileId",
        };
        write!(f, "{}", s)
    }
}

/// Case information missing from the graph response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InformationNotFound {
    #[error("{}", DOCTOR_NOT_FOUND)]
    DoctorNotFound,

    #[error("{}", CASE_NOT_FOUND)]
    CaseNotFound(RelationGap),

    #[error("{}", AUDIO_FILE_NOT_SET)]
    AudioFileNotSet(RelationGap),
}

impl InformationNotFound {
    /// Name of the relation that could not be followed
    pub fn relation(&self) -> &'static str {
        match self {
            Self::DoctorNotFound => "doctor",
            Self::CaseNotFound(_) => "cases",
            Self::AudioFileNotSet(_) => "audio",
        }
    }

    pub fn gap(&self) -> RelationGap {
        match self {
            Self::DoctorNotFound => RelationGap::NoEdges,
            Self::CaseNotFound(gap) | Self::AudioFileNotSet(gap) => *gap,
        }
    }
}

/// Walk doctor → case → audio and return the audio file id.
///
/// Each failure is logged at error level before it is returned.
pub fn extract_file_id(data: &GraphData) -> Result<String, InformationNotFound> {
    locate_file_id(data)
        .map(str::to_string)
        .inspect_err(|err| {
            tracing::error!(
                relation = err.relation(),
                gap = %err.gap(),
                "{}",
                err
            );
        })
}

fn locate_file_id(data: &GraphData) -> Result<&str, InformationNotFound> {
    let doctor = first_doctor(data)?;
    let case = first_case(doctor)?;
    audio_file_id(case)
}

fn first_doctor(data: &GraphData) -> Result<&DoctorNode, InformationNotFound> {
    data.doctor.first().ok_or(InformationNotFound::DoctorNotFound)
}

fn first_case(doctor: &DoctorNode) -> Result<&CaseNode, InformationNotFound> {
    first_node(&doctor.cases).map_err(InformationNotFound::CaseNotFound)
}

fn audio_file_id(case: &CaseNode) -> Result<&str, InformationNotFound> {
    let audio: &AudioNode = first_node(&case.audio).map_err(InformationNotFound::AudioFileNotSet)?;
    if audio.file_id.is_empty() {
        return Err(InformationNotFound::AudioFileNotSet(RelationGap::EmptyFileId));
    }
    Ok(&audio.file_id)
}

fn first_node<T>(relation: &Relation<Connection<T>>) -> Result<&T, RelationGap> {
    match relation {
        Relation::Absent => Err(RelationGap::Absent),
        Relation::Present(connection) => connection.first().ok_or(RelationGap::NoEdges),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio(file_id: &str) -> AudioNode {
        AudioNode {
            id: "A1".to_string(),
            file_id: file_id.to_string(),
        }
    }

    fn case(audio: Relation<Connection<AudioNode>>) -> CaseNode {
        CaseNode {
            id: "C1".to_string(),
            audio,
        }
    }

    fn graph(cases: Relation<Connection<CaseNode>>) -> GraphData {
        GraphData {
            doctor: Connection::new([DoctorNode {
                id: "D1".to_string(),
                cases,
            }]),
        }
    }

    fn with_audio(audio: Relation<Connection<AudioNode>>) -> GraphData {
        graph(Relation::Present(Connection::new([case(audio)])))
    }

    #[test]
    fn returns_file_id_of_first_audio() {
        let data = with_audio(Relation::Present(Connection::new([audio("F1")])));
        assert_eq!(extract_file_id(&data).unwrap(), "F1");
    }

    #[test]
    fn only_first_edges_are_consulted() {
        let first_case = case(Relation::Present(Connection::new([audio("F1"), audio("F2")])));
        let second_case = case(Relation::Present(Connection::new([audio("F3")])));
        let data = graph(Relation::Present(Connection::new([first_case, second_case])));

        assert_eq!(extract_file_id(&data).unwrap(), "F1");
    }

    #[test]
    fn first_audio_with_empty_file_id_is_not_skipped() {
        let data = with_audio(Relation::Present(Connection::new([audio(""), audio("F2")])));
        assert_eq!(
            extract_file_id(&data),
            Err(InformationNotFound::AudioFileNotSet(RelationGap::EmptyFileId))
        );
    }

    #[test]
    fn empty_doctor_edges() {
        let data = GraphData::default();
        let err = extract_file_id(&data).unwrap_err();
        assert_eq!(err, InformationNotFound::DoctorNotFound);
        assert_eq!(err.to_string(), DOCTOR_NOT_FOUND);
    }

    #[test]
    fn null_first_doctor_node() {
        let data: GraphData =
            serde_json::from_str(r#"{"doctor":{"edges":[{"node":null},{"node":{"id":"D2"}}]}}"#)
                .unwrap();
        assert_eq!(extract_file_id(&data), Err(InformationNotFound::DoctorNotFound));
    }

    #[test]
    fn null_first_case_edge() {
        let data: GraphData = serde_json::from_str(
            r#"{"doctor":{"edges":[{"node":{"id":"D1","cases":{"edges":[null]}}}]}}"#,
        )
        .unwrap();
        assert_eq!(
            extract_file_id(&data),
            Err(InformationNotFound::CaseNotFound(RelationGap::NoEdges))
        );
    }

    #[test]
    fn absent_cases() {
        let err = extract_file_id(&graph(Relation::Absent)).unwrap_err();
        assert_eq!(err, InformationNotFound::CaseNotFound(RelationGap::Absent));
        assert_eq!(err.to_string(), CASE_NOT_FOUND);
    }

    #[test]
    fn empty_cases() {
        let err = extract_file_id(&graph(Relation::Present(Connection::default()))).unwrap_err();
        assert_eq!(err, InformationNotFound::CaseNotFound(RelationGap::NoEdges));
    }

    #[test]
    fn absent_audio() {
        let err = extract_file_id(&with_audio(Relation::Absent)).unwrap_err();
        assert_eq!(err, InformationNotFound::AudioFileNotSet(RelationGap::Absent));
        assert_eq!(err.to_string(), AUDIO_FILE_NOT_SET);
    }

    #[test]
    fn empty_audio() {
        let err = extract_file_id(&with_audio(Relation::Present(Connection::default()))).unwrap_err();
        assert_eq!(err, InformationNotFound::AudioFileNotSet(RelationGap::NoEdges));
    }

    #[test]
    fn error_reports_relation_and_gap() {
        let err = InformationNotFound::AudioFileNotSet(RelationGap::EmptyFileId);
        assert_eq!(err.relation(), "audio");
        assert_eq!(err.gap().to_string(), "empty fileId");
    }
}
