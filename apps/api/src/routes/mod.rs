pub mod callback;
pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feeds::handlers::handle_get_jobs;
use crate::generation::handlers::{handle_generate_application, handle_generate_proposal};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/callback", get(callback::oauth_callback_handler))
        // Generation API
        .route("/api/generate-proposal", post(handle_generate_proposal))
        .route(
            "/api/generate-application",
            post(handle_generate_application),
        )
        // Live job feeds
        .route("/api/jobs", get(handle_get_jobs))
        .with_state(state)
}
