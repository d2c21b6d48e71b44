use std::sync::Arc;

use crate::application::ports::{CaseGraph, FileStore, Transcriber};
use crate::application::TranscribeCaseUseCase;

/// Shared handler state. The use case is immutable and shared across requests.
pub struct AppState<G, F, T>
where
    G: CaseGraph,
    F: FileStore,
    T: Transcriber,
{
    pub use_case: Arc<TranscribeCaseUseCase<G, F, T>>,
}

impl<G, F, T> AppState<G, F, T>
where
    G: CaseGraph,
    F: FileStore,
    T: Transcriber,
{
    pub fn new(use_case: TranscribeCaseUseCase<G, F, T>) -> Self {
        Self {
            use_case: Arc::new(use_case),
        }
    }
}

impl<G, F, T> Clone for AppState<G, F, T>
where
    G: CaseGraph,
    F: FileStore,
    T: Transcriber,
{
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
        }
    }
}
