// src/ports/router.rs
use std::sync::Arc;

use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::{NoteStore, Notebook};
use crate::ports::error::not_found_page;
use crate::ports::{api, web};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub notebook: Arc<Notebook>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self::from_notebook(Notebook::new(store))
    }

    pub fn from_notebook(notebook: Notebook) -> Self {
        Self {
            notebook: Arc::new(notebook),
        }
    }
}

async fn fallback() -> Response {
    not_found_page()
}

/// All routes; unmatched paths and unsupported methods get the 404 page.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/notes",
            get(api::list_notes).post(api::create_note).fallback(fallback),
        )
        .route(
            "/api/notes/{id}",
            get(api::get_note)
                .put(api::update_note)
                .delete(api::delete_note)
                .fallback(fallback),
        )
        .route("/", get(web::index).fallback(fallback))
        .route(
            "/notes/new",
            get(web::new_note_form).post(web::create_note).fallback(fallback),
        )
        .route("/notes/{id}", get(web::show_note).fallback(fallback))
        .route(
            "/notes/{id}/edit",
            get(web::edit_note_form).post(web::update_note).fallback(fallback),
        )
        .route("/notes/{id}/delete", post(web::delete_note).fallback(fallback))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
