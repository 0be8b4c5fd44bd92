// src/ports/web.rs
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header::LOCATION, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tracing::instrument;

use crate::ports::body::BodyFormat;
use crate::ports::html::HtmlPresenter;
use crate::ports::error::WebError;
use crate::ports::note_id::NoteId;
use crate::ports::router::AppState;

fn redirect_to(location: String) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let notes = state.notebook.list().await?;
    let presenter = HtmlPresenter::new();
    Ok(Html(presenter.render_page("Notes", &presenter.render_list(&notes))))
}

pub async fn new_note_form() -> Html<String> {
    let presenter = HtmlPresenter::new();
    Html(presenter.render_page("New Note", &presenter.render_form(None)))
}

#[instrument(level = "debug", skip_all)]
pub async fn create_note(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, WebError> {
    let fields = BodyFormat::Form.negotiate(&headers).decode(&body)?;
    fields.require_complete()?;
    state.notebook.create(fields).await?;
    Ok(redirect_to("/".to_string()))
}

pub async fn show_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> Result<Html<String>, WebError> {
    let note = state.notebook.get(id).await?;
    let presenter = HtmlPresenter::new();
    Ok(Html(presenter.render_page(note.display_title(), &presenter.render_detail(&note))))
}

pub async fn edit_note_form(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> Result<Html<String>, WebError> {
    let note = state.notebook.get(id).await?;
    let presenter = HtmlPresenter::new();
    Ok(Html(presenter.render_page("Edit Note", &presenter.render_form(Some(&note)))))
}

#[instrument(level = "debug", skip_all)]
pub async fn update_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, WebError> {
    let fields = BodyFormat::Form.negotiate(&headers).decode(&body)?;
    let note = state.notebook.update(id, fields).await?;
    Ok(redirect_to(format!("/notes/{}", note.id)))
}

pub async fn delete_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> Result<Response, WebError> {
    state.notebook.delete(id).await?;
    Ok(redirect_to("/".to_string()))
}
