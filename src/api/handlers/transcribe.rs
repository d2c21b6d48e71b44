use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::api::state::AppState;
use crate::application::ports::{CaseGraph, FileStore, Transcriber};
use crate::domain::case::{CaseRequest, ResultEnvelope, TranscribeResult};

/// `POST /v1/transcribe-offline`
///
/// Pipeline outcomes, failures included, are reported inside the envelope
/// with HTTP 200. Only an unreadable body gets a non-200 status, still with
/// an envelope.
#[utoipa::path(
    post,
    path = "/v1/transcribe-offline",
    tag = "transcription",
    request_body = CaseRequest,
    responses(
        (status = 200, description = "Pipeline outcome; `code` is 200 on success, 500 on failure", body = TranscribeResult),
        (status = 400, description = "Body is not valid JSON", body = TranscribeResult),
        (status = 415, description = "Content type is not application/json", body = TranscribeResult)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn transcribe_offline_handler<G, F, T>(
    State(state): State<AppState<G, F, T>>,
    payload: Result<Json<CaseRequest>, JsonRejection>,
) -> impl IntoResponse
where
    G: CaseGraph + 'static,
    F: FileStore + 'static,
    T: Transcriber + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Unreadable transcription request");
            let envelope: ResultEnvelope = ResultEnvelope::fail(rejection.body_text());
            return (rejection.status(), Json(envelope));
        }
    };

    tracing::info!(
        doctor_id = %request.doctor_id,
        case_id = %request.case_id,
        "Transcription requested"
    );

    let envelope = state.use_case.handle(&request).await;
    (StatusCode::OK, Json(envelope))
}
