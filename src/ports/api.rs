// src/ports/api.rs
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use tracing::instrument;

use crate::domain::Note;
use crate::ports::body::BodyFormat;
use crate::ports::error::ApiError;
use crate::ports::note_id::NoteId;
use crate::ports::router::AppState;

pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(state.notebook.list().await?))
}

pub async fn get_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(state.notebook.get(id).await?))
}

#[instrument(level = "debug", skip_all)]
pub async fn create_note(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let fields = BodyFormat::Json.negotiate(&headers).decode(&body)?;
    let note = state.notebook.create(fields).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[instrument(level = "debug", skip_all)]
pub async fn update_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Note>, ApiError> {
    let fields = BodyFormat::Json.negotiate(&headers).decode(&body)?;
    Ok(Json(state.notebook.update(id, fields).await?))
}

pub async fn delete_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(state.notebook.delete(id).await?))
}
