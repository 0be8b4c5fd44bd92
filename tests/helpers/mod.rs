use anyhow::{Context, Result};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use notekeeper::application::{NoteStore, Notebook};
use notekeeper::infrastructure::JsonFileStore;
use notekeeper::ports::{create_router, AppState};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Router over a notes file in a private temporary directory
#[allow(dead_code)]
pub struct TestApp {
    _temp_dir: TempDir,
    pub data_file: PathBuf,
    router: Router,
}

#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body)
            .with_context(|| format!("Response is not JSON: {}", self.body))
    }

    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/html"))
    }
}

#[allow(dead_code)]
impl TestApp {
    /// Start with no notes file at all
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let data_file = temp_dir.path().join("notes.json");
        let store = Arc::new(JsonFileStore::new(&data_file));
        Ok(Self {
            router: create_router(AppState::new(store)),
            _temp_dir: temp_dir,
            data_file,
        })
    }

    /// Start from a copy of `tests/fixtures/<name>`
    pub fn with_fixture(name: &str) -> Result<Self> {
        let app = Self::new()?;
        std::fs::copy(Self::fixture_path(name), &app.data_file)
            .context("Failed to copy notes fixture")?;
        Ok(app)
    }

    /// Serve from an arbitrary store, e.g. one that always fails
    pub fn with_store(store: Arc<dyn NoteStore>) -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let data_file = temp_dir.path().join("unused.json");
        Ok(Self {
            router: create_router(AppState::from_notebook(Notebook::new(store))),
            _temp_dir: temp_dir,
            data_file,
        })
    }

    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder
            .body(Body::from(body.to_string()))
            .context("Failed to build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("Router failed")?;

        let header_value = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let status = response.status();
        let location = header_value(header::LOCATION);
        let content_type = header_value(header::CONTENT_TYPE);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .context("Failed to read response body")?;

        Ok(TestResponse {
            status,
            location,
            content_type,
            body: String::from_utf8(bytes.to_vec()).context("Response body is not UTF-8")?,
        })
    }

    pub async fn get(&self, uri: &str) -> Result<TestResponse> {
        self.send("GET", uri, None, "").await
    }

    pub async fn delete(&self, uri: &str) -> Result<TestResponse> {
        self.send("DELETE", uri, None, "").await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> Result<TestResponse> {
        self.send("POST", uri, Some("application/json"), body).await
    }

    pub async fn put_json(&self, uri: &str, body: &str) -> Result<TestResponse> {
        self.send("PUT", uri, Some("application/json"), body).await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Result<TestResponse> {
        self.send("POST", uri, Some("application/x-www-form-urlencoded"), body)
            .await
    }

    /// Create a note through the API and return its id
    pub async fn create_note(&self, title: &str, content: &str) -> Result<i64> {
        let body = serde_json::json!({ "title": title, "content": content }).to_string();
        let response = self.post_json("/api/notes", &body).await?;
        anyhow::ensure!(
            response.status == StatusCode::CREATED,
            "Create failed: {} {}",
            response.status,
            response.body
        );
        response.json()?["id"]
            .as_i64()
            .context("Created note has no integer id")
    }

    pub fn persisted(&self) -> Result<Value> {
        let text = std::fs::read_to_string(&self.data_file).context("Failed to read notes file")?;
        serde_json::from_str(&text).context("Notes file is not JSON")
    }
}

/// Ids from `tests/fixtures/notes.json`
#[allow(dead_code)]
pub mod fixture_notes {
    pub const GROCERIES: i64 = 1700000000001;
    pub const IDEAS: i64 = 1700000000002; // content contains markup
    pub const DRAFT: i64 = 1700000000003; // no content field
    pub const NONEXISTENT: i64 = 999999999;
}
