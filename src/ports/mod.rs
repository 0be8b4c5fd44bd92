// src/ports/mod.rs
pub mod api;
pub mod body;
pub mod error;
pub mod html;
pub mod note_id;
pub mod router;
pub mod web;

pub use body::BodyFormat;
pub use html::HtmlPresenter;
pub use router::{create_router, AppState};
