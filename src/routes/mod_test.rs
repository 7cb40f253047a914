use super::*;
use crate::state::test_helpers::{StubLlm, test_app_state};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = app(test_app_state(Arc::new(StubLlm::new(Vec::new()))));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn root_reports_version_and_endpoints() {
    let (status, json) = get_json("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "FlowGen API - Text to Diagram Generator");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["endpoints"]["/generate"].is_string());
    assert!(json["endpoints"]["/types"].is_string());
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, json) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "FlowGen API");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = app(test_app_state(Arc::new(StubLlm::new(Vec::new()))));
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/generate")
                .header("origin", "https://example.com")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
