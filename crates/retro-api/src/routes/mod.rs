//! Route definitions
//!
//! API routes mounted under /api/v1; health routes are kept apart so they
//! bypass rate limiting.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, phases, reactji};
use crate::state::AppState;

/// Create the main API router (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(reactji_routes()).merge(meeting_routes())
}

fn reactji_routes() -> Router<AppState> {
    Router::new()
        .route("/reactji", post(reactji::add_reactji_to_reactable))
        .route(
            "/meetings/:meeting_id/reactables/:reactable_type/:reactable_id/reactjis",
            get(reactji::get_reactjis),
        )
}

fn meeting_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/meetings/:meeting_id/reflect-prompts",
            get(phases::get_reflect_prompts),
        )
        .route(
            "/meetings/:meeting_id/focused-prompt",
            get(phases::get_focused_prompt),
        )
        .route(
            "/meetings/:meeting_id/estimate-stages/:stage_id",
            get(phases::get_estimate_stage),
        )
        .route(
            "/meetings/:meeting_id/estimate-stages/:stage_id/reveal",
            post(phases::reveal_votes),
        )
}
