use std::sync::Arc;

use crate::concierge::Concierge;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the Gemini client and search service; shared read-only across requests.
    pub concierge: Arc<Concierge>,
}
