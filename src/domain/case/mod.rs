//! Case domain module

mod envelope;
mod extractor;
mod graph;
mod request;

pub use envelope::{ResultEnvelope, TranscribeResult, FAIL, SUCCESS};
pub use extractor::{
    extract_file_id, InformationNotFound, RelationGap, AUDIO_FILE_NOT_SET, CASE_NOT_FOUND,
    DOCTOR_NOT_FOUND,
};
pub use graph::{
    AudioNode, CaseNode, Connection, DoctorNode, Edge, GraphData, GraphResponse, Relation,
};
pub use request::CaseRequest;
