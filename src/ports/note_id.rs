// src/ports/note_id.rs
use std::sync::LazyLock;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::Response;
use regex::Regex;
use tracing::debug;

use crate::ports::error::not_found_page;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("id pattern is valid"));

/// Decimal note id taken from the `{id}` path segment.
///
/// Anything that is not all digits, or does not fit an `i64`, is rejected
/// with the catch-all 404 page as if no route had matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteId(pub i64);

pub fn parse_note_id(raw: &str) -> Option<i64> {
    if !ID_PATTERN.is_match(raw) {
        return None;
    }
    raw.parse().ok()
}

impl<S: Send + Sync> FromRequestParts<S> for NoteId {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found_page())?;

        parse_note_id(&raw).map(NoteId).ok_or_else(|| {
            debug!(raw = %raw, "Rejecting non-numeric note id");
            not_found_page()
        })
    }
}
