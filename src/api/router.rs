use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::{health_handler, transcribe_offline_handler};
use crate::api::openapi::{ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};
use crate::api::state::AppState;
use crate::application::ports::{CaseGraph, FileStore, Transcriber};

pub fn create_router<G, F, T>(state: AppState<G, F, T>) -> Router
where
    G: CaseGraph + 'static,
    F: FileStore + 'static,
    T: Transcriber + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/v1/transcribe-offline",
            post(transcribe_offline_handler::<G, F, T>),
        )
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(trace_layer)
        .with_state(state)
}
