// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for the prompt enhancement endpoints

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
};
use image_prompt_relay::api::{create_app, AppState, EnhancementsResponse};
use image_prompt_relay::enhance::patterns::QUALITY;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_enhance_prompt_returns_extended_prompt() {
    let app = create_app(Arc::new(AppState::new_for_test()));

    let response = app
        .oneshot(post("/api/enhance-prompt", r#"{"prompt": "  a quiet harbor  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("a quiet harbor, "));
    assert!(QUALITY.iter().any(|q| prompt.contains(q)));
}

#[tokio::test]
async fn test_enhance_prompt_blank_is_400() {
    let app = create_app(Arc::new(AppState::new_for_test()));

    let response = app
        .oneshot(post("/api/enhance-prompt", r#"{"prompt": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "prompt must not be empty");
}

#[tokio::test]
async fn test_enhancements_lists_all_groups() {
    let app = create_app(Arc::new(AppState::new_for_test()));

    let response = app
        .oneshot(post("/api/enhancements", r#"{"prompt": "forest landscape"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: EnhancementsResponse =
        serde_json::from_slice(&body_bytes(response).await).unwrap();

    assert_eq!(body.static_options.len(), 4);
    assert_eq!(body.recommendations.len(), 5);
    let dynamic: Vec<_> = body.dynamic.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(dynamic, vec!["Sunset version", "Misty atmosphere", "Autumn colors"]);
    assert_eq!(
        body.dynamic[0].prompt,
        "forest landscape, during golden hour sunset, warm colors, dramatic sky"
    );
}

#[tokio::test]
async fn test_enhancements_serializes_static_key() {
    let app = create_app(Arc::new(AppState::new_for_test()));

    let response = app
        .oneshot(post("/api/enhancements", r#"{"prompt": "a robot"}"#))
        .await
        .unwrap();

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(body["static"].is_array());
    assert_eq!(body["static"][0]["label"], "Add more details");
}
