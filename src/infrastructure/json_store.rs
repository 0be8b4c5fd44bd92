// src/infrastructure/json_store.rs
use crate::application::NoteStore;
use crate::domain::{DomainError, Note};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Notes persisted as one pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = PathBuf::from(path.as_ref());
        debug!(?path, "Creating new JsonFileStore");
        Self { path }
    }
}

/// Replace `path` via a sibling temp file so readers never see a partial write.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    file.write_all(bytes)
        .context("Failed to write notes to temp file")?;
    file.as_file()
        .sync_all()
        .context("Failed to flush notes temp file")?;
    file.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

#[async_trait]
impl NoteStore for JsonFileStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    async fn read_all(&self) -> Result<Vec<Note>, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Notes file absent, starting empty");
                return Ok(vec![]);
            }
            Err(e) => {
                return Err(DomainError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    #[instrument(level = "debug", skip(self, notes), fields(path = %self.path.display(), count = notes.len()))]
    async fn write_all(&self, notes: &[Note]) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(notes)
            .map_err(|e| DomainError::Storage(format!("Failed to serialize notes: {}", e)))?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, json.as_bytes()))
            .await
            .map_err(|e| DomainError::Storage(format!("Write task failed: {}", e)))?
            .map_err(|e| DomainError::Storage(format!("{:#}", e)))
    }
}
