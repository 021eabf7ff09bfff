use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Production: `LlmClient` (Gemini). Tests: canned stubs.
    pub model: Arc<dyn TextModel>,
    pub config: Config,
}
