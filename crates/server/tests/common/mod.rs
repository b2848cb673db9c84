//! Common test utilities for E2E testing with mocks.
//!
//! Provides an in-process server with mock media tool and object store
//! injected, so API tests run without ffmpeg or S3.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use vidvault_core::testing::{MockCatalog, MockMediaTool, MockObjectStore};
use vidvault_core::{load_config_from_str, JwtAuthenticator, VideoIngestor};
use vidvault_server::api::create_router;
use vidvault_server::state::AppState;

const TEST_JWT_SECRET: &str = "test-secret";

/// Test fixture for E2E testing with mock dependencies.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock media tool - configure probe dimensions, inject failures
    pub media: Arc<MockMediaTool>,
    /// Mock object store - inspect puts, inject failures
    pub store: Arc<MockObjectStore>,
    /// Mock catalog - seed records, inspect updates
    pub catalog: Arc<MockCatalog>,
    /// Spool directory for the ingestion pipeline
    pub spool_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with default mocks.
    pub fn new() -> Self {
        let spool_dir = TempDir::new().expect("Failed to create spool dir");

        let config = load_config_from_str(&format!(
            r#"
[auth]
jwt_secret = "{TEST_JWT_SECRET}"

[storage]
bucket = "vidvault-media"
region = "eu-west-1"
access_key = "AKIA123"
secret_key = "shhh"

[ingest]
spool_dir = "{}"
"#,
            spool_dir.path().display()
        ))
        .expect("Failed to build test config");

        let media = Arc::new(MockMediaTool::new());
        let store = Arc::new(MockObjectStore::new());
        let catalog = Arc::new(MockCatalog::new());

        let ingestor = Arc::new(VideoIngestor::new(
            media.clone(),
            store.clone(),
            catalog.clone(),
            config.ingest.clone(),
        ));

        let state = Arc::new(AppState::new(
            config.clone(),
            Arc::new(JwtAuthenticator::new(&config.auth.jwt_secret)),
            catalog.clone(),
            ingestor,
        ));

        Self {
            router: create_router(state),
            media,
            store,
            catalog,
            spool_dir,
        }
    }

    /// Mint a bearer token for a user.
    pub fn token_for(&self, user_id: Uuid) -> String {
        JwtAuthenticator::new(TEST_JWT_SECRET)
            .issue_token(user_id, 3600)
            .expect("Failed to issue token")
    }

    /// True when the spool directory holds no leftover files.
    pub fn spool_is_empty(&self) -> bool {
        std::fs::read_dir(self.spool_dir.path())
            .expect("Failed to read spool dir")
            .count()
            == 0
    }

    /// Send a GET request without credentials.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a GET request with a bearer token.
    pub async fn get_auth(&self, path: &str, token: &str) -> TestResponse {
        self.send(
            Request::builder()
                .uri(path)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Send a POST request with JSON body and a bearer token.
    pub async fn post_auth(&self, path: &str, token: &str, body: Value) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// POST a multipart upload with a single field.
    pub async fn upload(
        &self,
        path: &str,
        token: &str,
        field_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> TestResponse {
        let boundary = "vidvault-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{field_name}\"; \
                 filename=\"clip.mp4\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        self.send(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    /// Send a GET request and return the raw body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, String::from_utf8_lossy(&body_bytes).to_string())
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
