pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile engine
        .route("/api/v1/profile/analyze", post(handlers::handle_analyze))
        .route("/api/v1/profile/sign", post(handlers::handle_analyze_sign))
        .route(
            "/api/v1/profile/:session_id",
            get(handlers::handle_get_profile).delete(handlers::handle_clear_profile),
        )
        // Sign catalog (read-only)
        .route("/api/v1/signs", get(handlers::handle_list_signs))
        .route("/api/v1/signs/:id", get(handlers::handle_get_sign))
        .route(
            "/api/v1/signs/:a/compatibility/:b",
            get(handlers::handle_compatibility),
        )
        .with_state(state)
}
