pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assist::generate::GenerateDescription;
use crate::assist::handlers::handle_assist;
use crate::assist::optimize::OptimizeTone;
use crate::assist::suggest::SuggestKeywords;
use crate::content::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content API
        .route("/api/v1/profile", get(handlers::handle_get_profile))
        .route("/api/v1/projects", get(handlers::handle_list_projects))
        .route("/api/v1/projects/:id", get(handlers::handle_get_project))
        .route(
            "/api/v1/projects/:id/assist",
            get(handlers::handle_assist_defaults),
        )
        // Assist API
        .route(
            "/api/v1/assist/generate-description",
            post(handle_assist::<GenerateDescription>),
        )
        .route(
            "/api/v1/assist/suggest-keywords",
            post(handle_assist::<SuggestKeywords>),
        )
        .route(
            "/api/v1/assist/optimize-tone",
            post(handle_assist::<OptimizeTone>),
        )
        .with_state(state)
}
