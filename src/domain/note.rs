// src/domain/note.rs
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A persisted note.
///
/// `title` and `content` are optional because the JSON API accepts bodies
/// without them; absent fields are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// The client-writable subset of a note, as decoded from a request body.
///
/// Only `title` and `content` are mergeable. Any other field in the body,
/// including `id`, is ignored during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Note {
    pub fn new(id: i64, fields: NoteFields) -> Self {
        Self {
            id,
            title: fields.title,
            content: fields.content,
        }
    }

    /// Shallow merge: fields present in `fields` overwrite, absent ones are kept.
    pub fn merge(&mut self, fields: NoteFields) {
        if let Some(title) = fields.title {
            self.title = Some(title);
        }
        if let Some(content) = fields.content {
            self.content = Some(content);
        }
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Title for headings and links; never empty.
    pub fn display_title(&self) -> &str {
        match self.title_or_empty() {
            "" => "Untitled",
            title => title,
        }
    }

    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

impl NoteFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Both fields must be present and non-empty, as the web form requires.
    pub fn require_complete(&self) -> Result<(), DomainError> {
        for (name, value) in [("title", &self.title), ("content", &self.content)] {
            match value.as_deref() {
                Some(v) if !v.is_empty() => {}
                _ => return Err(DomainError::InvalidNote(format!("{name} is required"))),
            }
        }
        Ok(())
    }
}
