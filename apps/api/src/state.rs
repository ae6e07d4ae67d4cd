use std::sync::Arc;

use crate::config::Config;
use crate::embedding::Embedder;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything in here is immutable after startup. The comparators hold no
/// state across requests, so no locking exists anywhere in the service.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Embedding backend, constructed once at startup and injected into the
    /// semantic comparator and the answer validity checker.
    pub embedder: Arc<dyn Embedder>,
    pub config: Config,
}
