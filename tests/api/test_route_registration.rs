// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route registration tests
//!
//! These tests verify that:
//! - The relay and enhancement routes accept POST only
//! - Unknown routes return 404
//! - /health reports whether the relay is configured

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
};
use image_prompt_relay::api::{create_app, AppState, HealthResponse};
use image_prompt_relay::relay::FalClient;
use std::sync::Arc;
use tower::util::ServiceExt;

fn configured_state() -> AppState {
    let client = FalClient::new("http://127.0.0.1:59999/gen", "k", "square_hd").unwrap();
    AppState::new(client, vec!["*".to_string()])
}

#[tokio::test]
async fn test_post_routes_reject_get() {
    for uri in ["/api/generate-image", "/api/enhance-prompt", "/api/enhancements"] {
        let app = create_app(Arc::new(AppState::new_for_test()));
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "GET {} should be rejected with 405",
            uri
        );
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_app(Arc::new(AppState::new_for_test()));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/nope")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_configured() {
    let app = create_app(Arc::new(configured_state()));
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health.status, "ok");
    assert!(health.issues.is_none());
}

#[tokio::test]
async fn test_health_unconfigured_is_degraded() {
    let app = create_app(Arc::new(AppState::new_for_test()));
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health.status, "degraded");
    assert_eq!(health.issues.unwrap().len(), 1);
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let app = create_app(Arc::new(AppState::new_for_test()));
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/generate-image")
        .header("origin", "https://studio.example")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

#[tokio::test]
async fn test_version_route_reports_build() {
    let app = create_app(Arc::new(AppState::new_for_test()));
    let request = Request::builder()
        .uri("/version")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let info: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(info["version"], image_prompt_relay::version::VERSION_NUMBER);
    assert_eq!(info["build"], image_prompt_relay::version::VERSION);
    assert!(info["features"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f == "generate-image-relay"));
}
