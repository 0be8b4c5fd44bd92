// src/infrastructure/mod.rs
pub mod json_store;

pub use json_store::JsonFileStore;
