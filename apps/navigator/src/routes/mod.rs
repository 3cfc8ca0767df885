pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::concierge::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roadmap API
        .route("/api/v1/roadmap", post(handlers::handle_roadmap))
        .route(
            "/api/v1/roadmap/upload",
            post(handlers::handle_roadmap_upload),
        )
        .route("/api/v1/skill-gap", post(handlers::handle_skill_gap))
        .with_state(state)
}
