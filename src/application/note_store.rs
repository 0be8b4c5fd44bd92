// src/application/note_store.rs
use async_trait::async_trait;

use crate::domain::{DomainError, Note};

/// Whole-collection persistence for notes.
///
/// Every operation loads or replaces the full collection; there are no
/// partial updates.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Load every note. A store that has never been written reads as empty.
    async fn read_all(&self) -> Result<Vec<Note>, DomainError>;

    /// Replace the persisted collection with `notes`.
    async fn write_all(&self, notes: &[Note]) -> Result<(), DomainError>;
}
