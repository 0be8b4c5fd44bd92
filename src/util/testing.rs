// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use std::env;
use tokio::sync::RwLock;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteStore;
use crate::domain::{DomainError, Note};

/// In-memory note store for exercising use cases and handlers without a file.
///
/// # Examples
///
/// ```
/// use notekeeper::util::testing::MemoryNoteStore;
/// use notekeeper::domain::{Note, NoteFields};
///
/// let store = MemoryNoteStore::builder()
///     .with_note(Note::new(123, NoteFields::new("Question", "Answer")))
///     .build();
/// ```
pub struct MemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn builder() -> MemoryNoteStoreBuilder {
        MemoryNoteStoreBuilder::new()
    }

    /// Current contents, as the last `write_all` left them.
    pub async fn snapshot(&self) -> Vec<Note> {
        self.notes.read().await.clone()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn read_all(&self) -> Result<Vec<Note>, DomainError> {
        Ok(self.notes.read().await.clone())
    }

    async fn write_all(&self, notes: &[Note]) -> Result<(), DomainError> {
        *self.notes.write().await = notes.to_vec();
        Ok(())
    }
}

/// Builder for MemoryNoteStore
pub struct MemoryNoteStoreBuilder {
    notes: Vec<Note>,
}

impl MemoryNoteStoreBuilder {
    pub fn new() -> Self {
        Self { notes: vec![] }
    }

    /// Seed a note, kept in insertion order
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn build(self) -> MemoryNoteStore {
        MemoryNoteStore {
            notes: RwLock::new(self.notes),
        }
    }
}

impl Default for MemoryNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Store whose every operation fails, for exercising storage-fault paths.
pub struct FailingNoteStore;

#[async_trait]
impl NoteStore for FailingNoteStore {
    async fn read_all(&self) -> Result<Vec<Note>, DomainError> {
        Err(DomainError::Storage("simulated read failure".to_string()))
    }

    async fn write_all(&self, _notes: &[Note]) -> Result<(), DomainError> {
        Err(DomainError::Storage("simulated write failure".to_string()))
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let noisy_modules = ["hyper", "tower", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
