use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use remoview_core::models::{SessionId, SessionResult};

use crate::dto::SubmitSessionRequest;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn submit_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitSessionRequest>,
) -> Result<(StatusCode, Json<SessionResult>), ApiError> {
    tracing::info!(
        lat = request.coordinates.lat,
        lng = request.coordinates.lng,
        "Processing session request"
    );

    let result = state.processor.submit(request.coordinates, &request.guesses).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SessionResult>>, ApiError> {
    let sessions = state.processor.history().await?;
    Ok(Json(sessions))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionResult>, ApiError> {
    let id: SessionId = id.parse().map_err(|_| {
        ApiError::not_found("Session not found").with_details(format!("Session not found: {}", id))
    })?;

    let result = state.processor.find(id).await?;
    Ok(Json(result))
}
