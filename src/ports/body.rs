// src/ports/body.rs
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde_json::{Map, Value};

use crate::domain::{DomainError, NoteFields};

/// Wire encoding of a submitted note body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Form,
}

impl BodyFormat {
    /// Pick the decoder named by the request's `Content-Type`, falling back to `self`.
    pub fn negotiate(self, headers: &HeaderMap) -> Self {
        let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
            return self;
        };
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "application/json" => BodyFormat::Json,
            "application/x-www-form-urlencoded" => BodyFormat::Form,
            _ => self,
        }
    }

    /// Decode an accumulated request body into the mergeable note fields.
    pub fn decode(self, body: &[u8]) -> Result<NoteFields, DomainError> {
        match self {
            BodyFormat::Json => {
                // Must be an object; derived structs also accept sequences.
                let object: Map<String, Value> = serde_json::from_slice(body)
                    .map_err(|e| DomainError::MalformedBody(format!("invalid JSON: {}", e)))?;
                serde_json::from_value(Value::Object(object))
                    .map_err(|e| DomainError::MalformedBody(format!("invalid JSON: {}", e)))
            }
            BodyFormat::Form => serde_urlencoded::from_bytes(body)
                .map_err(|e| DomainError::MalformedBody(format!("invalid form data: {}", e))),
        }
    }
}
