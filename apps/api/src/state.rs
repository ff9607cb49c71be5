use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Completion backend. `OpenAiClient` in production; tests swap in a mock.
    pub completion: Arc<dyn CompletionProvider>,
}
