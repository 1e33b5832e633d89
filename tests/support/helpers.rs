// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt as _;

use newsroom_core::application::ports::ClockPort;
use newsroom_core::application::services::ApplicationServices;
use newsroom_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use newsroom_core::domain::comment::CommentRepository;
use newsroom_core::domain::topic::TopicRepository;
use newsroom_core::domain::user::UserRepository;
use newsroom_core::presentation::http::routes::build_app;
use newsroom_core::presentation::http::state::HttpState;

use super::mocks::{BrokenStore, DummyClock, MemoryStore};

/// Wires every repository port to the same backing store.
pub fn build_services<S>(store: Arc<S>) -> Arc<ApplicationServices>
where
    S: TopicRepository
        + ArticleReadRepository
        + ArticleWriteRepository
        + CommentRepository
        + UserRepository
        + 'static,
{
    let topics: Arc<dyn TopicRepository> = store.clone();
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let article_write: Arc<dyn ArticleWriteRepository> = store.clone();
    let comments: Arc<dyn CommentRepository> = store.clone();
    let users: Arc<dyn UserRepository> = store;
    let clock: Arc<ClockPort> = Arc::new(DummyClock);

    Arc::new(ApplicationServices::new(
        topics,
        article_read,
        article_write,
        comments,
        users,
        clock,
    ))
}

/// Full HTTP stack (path normalisation, routing, error mapping) over an
/// in-memory store.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    state: HttpState,
}

impl TestApp {
    pub fn seeded() -> Self {
        Self::with_store(Arc::new(MemoryStore::seeded()))
    }

    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        let state = HttpState {
            services: build_services(Arc::clone(&store)),
        };
        Self { store, state }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Method::GET, uri, Body::empty(), false).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.send(Method::DELETE, uri, Body::empty(), false).await
    }

    pub async fn patch_json(&self, uri: &str, payload: &Value) -> Response {
        self.send(Method::PATCH, uri, Body::from(payload.to_string()), true)
            .await
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> Response {
        self.send(Method::POST, uri, Body::from(payload.to_string()), true)
            .await
    }

    /// Sends a body verbatim, for payloads that are not valid JSON.
    pub async fn send_raw(&self, method: Method, uri: &str, raw: &'static str) -> Response {
        self.send(method, uri, Body::from(raw), true).await
    }

    async fn send(&self, method: Method, uri: &str, body: Body, json: bool) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if json {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let req = builder.body(body).unwrap();
        build_app(self.state.clone()).oneshot(req).await.unwrap()
    }
}

/// Router whose every repository call fails like a lost database.
pub async fn broken_app_get(uri: &str) -> Response {
    let state = HttpState {
        services: build_services(Arc::new(BrokenStore)),
    };
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    build_app(state).oneshot(req).await.unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Asserts a `{"msg": "<code>: <reason>"}` error body with the given status.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, reason: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = json_body(resp).await;
    let expected = format!("{}: {reason}", expected_status.as_u16());
    assert_eq!(json["msg"], Value::String(expected));
}

/// True when `key` is monotonically ordered across the array.
pub fn is_sorted_by(items: &[Value], key: &str, descending: bool) -> bool {
    items.windows(2).all(|pair| {
        let ordering = compare_values(&pair[0][key], &pair[1][key]);
        if descending {
            ordering != std::cmp::Ordering::Less
        } else {
            ordering != std::cmp::Ordering::Greater
        }
    })
}

fn compare_values(a: &Value, b: &Value) -> std::cmp::Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_i64()
            .unwrap_or_default()
            .cmp(&y.as_i64().unwrap_or_default()),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => panic!("cannot compare {a} with {b}"),
    }
}
