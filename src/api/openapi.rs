//! OpenAPI document for the HTTP API, served through Swagger UI

use utoipa::OpenApi;

use crate::api::handlers::HealthResponse;
use crate::domain::case::{CaseRequest, TranscribeResult};

/// Swagger UI mount point
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";
/// Generated OpenAPI JSON
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "case-transcriber", description = "Transcribes case audio and writes the text back to the case graph"),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::transcribe::transcribe_offline_handler
    ),
    components(schemas(CaseRequest, TranscribeResult, HealthResponse)),
    tags(
        (name = "transcription", description = "Offline case transcription"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_both_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/v1/transcribe-offline"));
    }

    #[test]
    fn registers_request_and_envelope_schemas() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("CaseRequest"));
        assert!(json.contains("TranscribeResult"));
        assert!(json.contains("doctorId"));
    }
}
