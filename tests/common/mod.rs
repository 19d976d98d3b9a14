//! Test utilities and in-process router harness for Pulsecheck tests.
//!
//! Provides:
//! - Temporary quote-store fixtures
//! - Router construction helpers
//! - One-shot request helpers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use pulsecheck::config::Config;
use pulsecheck::server::{build_router, ServerState};
use pulsecheck::storage::QuoteStore;

/// Test fixture that manages a temporary quote-store directory.
///
/// The directory is automatically cleaned up when the fixture is dropped.
pub struct TestFixture {
    /// Temporary directory for the test database
    pub temp_dir: TempDir,
    /// Path to the database file
    pub db_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with a temporary database directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let db_path = temp_dir.path().join("quotes.db");
        Self { temp_dir, db_path }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn test_config(database: PathBuf) -> Config {
    Config {
        host: "127.0.0.1".into(),
        port: 0,
        log_level: "debug".into(),
        otel_endpoint: None,
        app_version: "v0.0.1-test".into(),
        environment: "TEST".into(),
        database,
        kv_name: None,
        db_secret_name: None,
    }
}

/// Build server state with a bootstrapped quote store.
pub fn test_state(fixture: &TestFixture) -> Arc<ServerState> {
    let store = QuoteStore::open(&fixture.db_path).expect("failed to open store");
    store.bootstrap().expect("failed to bootstrap store");

    let config = test_config(fixture.db_path.clone());
    Arc::new(ServerState::new(
        &config,
        Some(store),
        fixture.db_path.display().to_string(),
    ))
}

/// Build server state without a quote store (degraded mode).
pub fn test_state_without_store() -> Arc<ServerState> {
    let config = test_config(PathBuf::from("/nonexistent/quotes.db"));
    Arc::new(ServerState::new(&config, None, "unconfigured".to_string()))
}

/// Build the application router over the given state.
pub fn test_router(state: Arc<ServerState>) -> Router {
    build_router(state)
}

/// Issue a one-shot GET request and return status plus parsed JSON body.
///
/// Panics if the body is not valid JSON; use [`get_text`] for plain-text
/// endpoints.
pub async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let json = serde_json::from_slice(&bytes).expect("body is not valid JSON");
    (status, json)
}

/// Issue a one-shot GET request and return status plus the raw body text.
pub async fn get_text(app: &Router, path: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.temp_dir.path().exists());
        assert!(fixture.db_path.to_string_lossy().contains("quotes.db"));
    }
}
