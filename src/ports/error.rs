// src/ports/error.rs
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::constants::NOTE_NOT_FOUND_MESSAGE;
use crate::domain::DomainError;
use crate::ports::HtmlPresenter;

/// A [`DomainError`] rendered as a JSON `{"error": ...}` response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

/// A [`DomainError`] rendered as an HTML error page.
#[derive(Debug)]
pub struct WebError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for WebError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

fn status_of(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NoteNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::MalformedBody(_) | DomainError::InvalidNote(_) => StatusCode::BAD_REQUEST,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        let message = match &self.0 {
            DomainError::NoteNotFound(_) => NOTE_NOT_FOUND_MESSAGE.to_string(),
            DomainError::MalformedBody(msg) | DomainError::InvalidNote(msg) => msg.clone(),
            DomainError::Storage(msg) => {
                error!(error = %msg, "API request failed");
                "Internal server error".to_string()
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let presenter = HtmlPresenter::new();
        let status = status_of(&self.0);
        let page = match &self.0 {
            DomainError::NoteNotFound(_) => presenter.render_not_found(),
            DomainError::MalformedBody(msg) | DomainError::InvalidNote(msg) => {
                presenter.render_bad_request(msg)
            }
            DomainError::Storage(msg) => {
                error!(error = %msg, "Web request failed");
                presenter.render_server_error()
            }
        };
        (status, Html(page)).into_response()
    }
}

/// The catch-all response for anything no route handles.
pub fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(HtmlPresenter::new().render_not_found()),
    )
        .into_response()
}
