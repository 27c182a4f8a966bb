//! Shared integration-test harness.
//!
//! Builds the full application router (same middleware stack as `main.rs`)
//! against a `#[sqlx::test]` pool, with the external model replaced by a
//! queue-driven stub so tests control every pipeline response.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use pony_api::config::{LlmConfig, ServerConfig};
use pony_api::routes;
use pony_api::state::AppState;
use pony_llm::{CallLogger, ChatModel, LlmError, PromptStore, Summarizer};

/// Queue-driven stand-in for the external model.
///
/// Responses are consumed front-to-back; an exhausted queue behaves like an
/// API failure so tests that queue nothing exercise the failure paths.
pub struct StubModel {
    responses: Mutex<VecDeque<Result<String, String>>>,
    calls: AtomicUsize,
}

impl StubModel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        })
    }

    /// Queue a successful completion.
    pub fn push_response(&self, text: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
    }

    /// Queue a transport-level failure.
    pub fn push_failure(&self, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(body.to_string()));
    }

    /// Number of completion calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatModel for StubModel {
    fn name(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("stub model queue exhausted".to_string()));
        next.map_err(|body| LlmError::Api { status: 503, body })
    }
}

/// A router plus the temp directories its summarizer depends on.
pub struct TestApp {
    pub pool: PgPool,
    pub model: Arc<StubModel>,
    pub log_dir: TempDir,
    _prompt_dir: TempDir,
    router: Router,
}

impl TestApp {
    /// A fresh clone of the application router for one request.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(prompts_dir: &str, log_dir: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        llm: LlmConfig {
            api_key: "test-key".to_string(),
            base_url: "http://localhost:0".to_string(),
            model: "stub-model".to_string(),
            prompts_dir: prompts_dir.to_string(),
            log_dir: log_dir.to_string(),
        },
    }
}

/// Build the full application with all middleware layers, using the given
/// database pool and a fresh [`StubModel`].
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> TestApp {
    let prompt_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        prompt_dir.path().join("extract_participants.txt"),
        "List the participants in this transcript:\n{transcript}",
    )
    .unwrap();
    std::fs::write(
        prompt_dir.path().join("meeting_summary.txt"),
        "Summarize this transcript as JSON:\n{transcript}",
    )
    .unwrap();
    let log_dir = tempfile::tempdir().unwrap();

    let config = test_config(
        prompt_dir.path().to_str().unwrap(),
        log_dir.path().to_str().unwrap(),
    );

    let model = StubModel::new();
    let summarizer = Arc::new(Summarizer::new(
        model.clone() as Arc<dyn ChatModel>,
        PromptStore::new(prompt_dir.path()),
        CallLogger::new(log_dir.path()),
    ));

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config),
        summarizer,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let router = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    TestApp {
        pool,
        model,
        log_dir,
        _prompt_dir: prompt_dir,
        router,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
