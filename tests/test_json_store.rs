mod helpers;

use anyhow::Result;
use helpers::{fixture_notes, TestApp};
use notekeeper::application::NoteStore;
use notekeeper::domain::{Note, NoteFields};
use notekeeper::infrastructure::JsonFileStore;
use serde_json::{json, Value};

#[tokio::test]
async fn given_fixture_when_reading_and_writing_back_then_content_is_unchanged() -> Result<()> {
    // Arrange
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("notes.json");
    std::fs::copy(TestApp::fixture_path("notes.json"), &path)?;
    let before: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let store = JsonFileStore::new(&path);

    // Act
    let notes = store.read_all().await?;
    store.write_all(&notes).await?;

    // Assert
    let after: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(before, after);
    Ok(())
}

#[tokio::test]
async fn given_fixture_note_without_content_when_reading_then_content_is_none() -> Result<()> {
    let store = JsonFileStore::new(TestApp::fixture_path("notes.json"));

    let notes = store.read_all().await?;

    let draft = notes
        .iter()
        .find(|n| n.id == fixture_notes::DRAFT)
        .expect("draft note in fixture");
    assert_eq!(draft.title.as_deref(), Some("Draft"));
    assert_eq!(draft.content, None);
    Ok(())
}

#[tokio::test]
async fn given_existing_file_when_writing_then_replaces_it_entirely() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("notes.json");
    std::fs::copy(TestApp::fixture_path("notes.json"), &path)?;
    let store = JsonFileStore::new(&path);

    store
        .write_all(&[Note::new(1, NoteFields::new("only", "one"))])
        .await?;

    assert_eq!(store.read_all().await?.len(), 1);
    let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name() != "notes.json")
        .collect();
    assert!(leftovers.is_empty(), "temp files should not linger");
    Ok(())
}

#[tokio::test]
async fn given_api_create_when_inspecting_file_then_layout_matches_note_objects() -> Result<()> {
    let app = TestApp::new()?;

    let id = app.create_note("T", "C").await?;

    assert_eq!(app.persisted()?, json!([{ "id": id, "title": "T", "content": "C" }]));
    let raw = std::fs::read_to_string(&app.data_file)?;
    assert!(raw.starts_with("[\n  {\n    \"id\": "));
    Ok(())
}
