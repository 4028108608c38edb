use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::CoordinatesResponse;
use crate::state::AppState;

/// Sample target coordinates for a new session
pub async fn new_coordinates(State(state): State<Arc<AppState>>) -> Json<CoordinatesResponse> {
    Json(state.processor.start().into())
}
