use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Coordinates
        .route("/api/v1/coordinates", get(handlers::new_coordinates))

        // Sessions
        .route("/api/v1/sessions", post(handlers::submit_session).get(handlers::list_sessions))
        .route("/api/v1/sessions/{id}", get(handlers::get_session))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
