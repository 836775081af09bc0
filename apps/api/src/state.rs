use std::sync::Arc;

use crate::content::store::ContentStore;
use crate::llm_client::GenerationClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutable; concurrent assist calls share no state.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    /// Anthropic-backed in production, stubbed in tests.
    pub llm: Arc<dyn GenerationClient>,
}
