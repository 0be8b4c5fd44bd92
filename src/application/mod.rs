// src/application/mod.rs
pub mod note_store;
pub mod notebook;

pub use note_store::NoteStore;
pub use notebook::Notebook;
