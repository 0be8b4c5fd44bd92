// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Invalid note: {0}")]
    InvalidNote(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
