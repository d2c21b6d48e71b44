//! Shared fixtures for integration tests

#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use case_transcriber::application::TranscribeCaseUseCase;
use case_transcriber::infrastructure::{GraphQlCaseGraph, HttpFileStore, HttpTranscriber};

pub const GRAPH_PATH: &str = "/v1/graphql";
pub const FILE_PATH: &str = "/file/download/";
pub const ASR_PATH: &str = "/transcribe";

pub const AUDIO_BYTES: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt fake audio";
pub const TRANSCRIPT: &str = "Patient reports\nmild pain";

pub type HttpUseCase = TranscribeCaseUseCase<GraphQlCaseGraph, HttpFileStore, HttpTranscriber>;

/// Graph response with one doctor, one case and one audio file
pub fn case_response(doctor_id: &str, case_id: &str, file_id: &str) -> serde_json::Value {
    json!({
        "data": {
            "doctor": {
                "edges": [{
                    "node": {
                        "id": doctor_id,
                        "cases": {
                            "edges": [{
                                "node": {
                                    "id": case_id,
                                    "audio": {
                                        "edges": [{ "node": { "id": "A1", "fileId": file_id } }]
                                    }
                                }
                            }]
                        }
                    }
                }]
            }
        }
    })
}

/// Mount the case lookup. The mutation never asks for `fileId`.
pub async fn mount_lookup(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(GRAPH_PATH))
        .and(body_string_contains("fileId"))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_upload(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(GRAPH_PATH))
        .and(body_string_contains("mutation"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub async fn mount_file(server: &MockServer, file_id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("{}{}", FILE_PATH, file_id)))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_transcriber(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(ASR_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mount all four collaborators answering the happy path for D1/C1/F1
pub async fn mount_happy_path(server: &MockServer) {
    mount_lookup(
        server,
        ResponseTemplate::new(200).set_body_json(case_response("D1", "C1", "F1")),
    )
    .await;
    mount_file(server, "F1", ResponseTemplate::new(200).set_body_bytes(AUDIO_BYTES)).await;
    mount_transcriber(server, ResponseTemplate::new(200).set_body_string(TRANSCRIPT)).await;
    mount_upload(server, 200).await;
}

/// Use case wired to a mock server
pub fn use_case(server: &MockServer) -> HttpUseCase {
    let base = server.uri();
    TranscribeCaseUseCase::new(
        GraphQlCaseGraph::new(format!("{}{}", base, GRAPH_PATH)),
        HttpFileStore::new(format!("{}{}", base, FILE_PATH)),
        HttpTranscriber::new(format!("{}{}", base, ASR_PATH)),
    )
}

/// The decoded `query` field of a graph request
pub fn graph_query(request: &Request) -> String {
    let body: serde_json::Value =
        serde_json::from_slice(&request.body).expect("graph body should be JSON");
    body["query"]
        .as_str()
        .expect("graph body should carry a query string")
        .to_string()
}

pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording should be enabled")
}
