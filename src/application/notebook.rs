// src/application/notebook.rs
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::application::NoteStore;
use crate::domain::{DomainError, Note, NoteFields};

/// Note use cases over a [`NoteStore`].
///
/// Mutations run their read-modify-write cycle under one lock, so two
/// concurrent writers can no longer overwrite each other's changes.
pub struct Notebook {
    store: Arc<dyn NoteStore>,
    write_lock: Mutex<()>,
    clock: fn() -> i64,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Clock value, bumped past the largest existing id when the clock has not
/// moved on (same millisecond, or a clock that went backwards).
fn next_id(notes: &[Note], now: i64) -> Result<i64, DomainError> {
    match notes.iter().map(|n| n.id).max() {
        Some(max) if max >= now => max
            .checked_add(1)
            .ok_or_else(|| DomainError::Storage("id space exhausted".to_string())),
        _ => Ok(now),
    }
}

impl Notebook {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self::with_clock(store, now_millis)
    }

    pub fn with_clock(store: Arc<dyn NoteStore>, clock: fn() -> i64) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
            clock,
        }
    }

    pub async fn list(&self) -> Result<Vec<Note>, DomainError> {
        self.store.read_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Note, DomainError> {
        self.store
            .read_all()
            .await?
            .into_iter()
            .find(|n| n.id == id)
            .ok_or(DomainError::NoteNotFound(id))
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn create(&self, fields: NoteFields) -> Result<Note, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.store.read_all().await?;

        let note = Note::new(next_id(&notes, (self.clock)())?, fields);
        notes.push(note.clone());
        self.store.write_all(&notes).await?;

        info!(id = note.id, "Created note");
        Ok(note)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn update(&self, id: i64, fields: NoteFields) -> Result<Note, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.store.read_all().await?;

        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(DomainError::NoteNotFound(id))?;
        note.merge(fields);
        let updated = note.clone();
        self.store.write_all(&notes).await?;

        debug!(?updated, "Updated note");
        Ok(updated)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&self, id: i64) -> Result<Note, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.store.read_all().await?;

        let index = notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(DomainError::NoteNotFound(id))?;
        let removed = notes.remove(index);
        self.store.write_all(&notes).await?;

        info!(id, "Deleted note");
        Ok(removed)
    }
}
