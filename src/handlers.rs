// handlers.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::error::ApiError;
use crate::models::{Poll, PollDraft};
use crate::services::PollService;
use crate::state::AppState;

fn service(state: &AppState) -> PollService<'_> {
    PollService::new(state.store.as_ref(), state.timeouts)
}

/// Create a poll from the request body
pub async fn create_poll(
    State(state): State<AppState>,
    payload: Result<Json<PollDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Poll>), ApiError> {
    let Json(draft) = payload.map_err(|rejection| {
        let reason = rejection.body_text();
        warn!("Error decoding poll payload: {reason}");
        ApiError::InvalidBody(reason)
    })?;

    let poll = service(&state).create(draft).await?;
    Ok((StatusCode::CREATED, Json(poll)))
}

/// Fetch a single poll by id
pub async fn get_poll(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Poll>, ApiError> {
    service(&state).get(&id).await.map(Json)
}

/// List every poll; an empty store yields `[]`
pub async fn list_polls(State(state): State<AppState>) -> Result<Json<Vec<Poll>>, ApiError> {
    service(&state).list().await.map(Json)
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "message": "Poll backend is running!",
        "status": "OK"
    }))
}
