// tests/support/helpers.rs
use super::mocks::{FailingArticleRepo, InMemoryArticleRepo};
use article_service::application::services::ApplicationServices;
use article_service::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use article_service::presentation::http::{routes::build_router, state::HttpState};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_services(
    write: Arc<dyn ArticleWriteRepository>,
    read: Arc<dyn ArticleReadRepository>,
) -> ApplicationServices {
    ApplicationServices::new(write, read)
}

pub fn make_test_router() -> (Router, Arc<InMemoryArticleRepo>) {
    let repo = Arc::new(InMemoryArticleRepo::new());
    let services = build_services(repo.clone(), repo.clone());
    let state = HttpState {
        services: Arc::new(services),
    };
    (build_router(state), repo)
}

pub fn make_failing_router() -> Router {
    let repo = Arc::new(FailingArticleRepo);
    let services = build_services(repo.clone(), repo);
    let state = HttpState {
        services: Arc::new(services),
    };
    build_router(state)
}

/// Sends one request and returns the status and the decoded JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Sends a raw (possibly malformed) JSON body.
pub async fn send_raw_json(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    send_raw(app, method, uri, Some("application/json"), raw).await
}

/// Sends a raw body with the given `Content-Type`, or none at all.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    raw: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    let req = builder.body(Body::from(raw.to_string())).unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Assert that a body is an ErrorResponse with the expected error string.
pub fn assert_error_body(json: &Value, expected_error: &str) {
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {json}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}

pub fn error_messages(json: &Value) -> Vec<String> {
    json.get("errors")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
