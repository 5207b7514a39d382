// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! RelayClient against a relay router served on a local port

use crate::mock_upstream::{self, TEST_KEY};
use image_prompt_relay::api::{create_app, AppState};
use image_prompt_relay::relay::{FalClient, ImageGenerator, RelayClient, RelayError};
use image_prompt_relay::session::{GenerationResult, PromptSession};
use serde_json::json;
use std::sync::Arc;

/// Serve the relay router on a local port and return its base URL
async fn serve_relay(state: AppState) -> String {
    let app = create_app(Arc::new(state));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn relay_for(upstream_url: &str) -> String {
    let client = FalClient::new(upstream_url, TEST_KEY, "square_hd").unwrap();
    serve_relay(AppState::new(client, vec!["*".to_string()])).await
}

#[tokio::test]
async fn test_relay_client_round_trip() {
    let upstream = mock_upstream::start(200, r#"{"images":[{"url":"https://x/y.png"}]}"#).await;
    let base = relay_for(&upstream.url).await;

    let client = RelayClient::new(&base).unwrap();
    let data = client.generate("a cat").await.unwrap();
    assert_eq!(data, json!({"images": [{"url": "https://x/y.png"}]}));
    assert_eq!(upstream.requests()[0].body["prompt"], "a cat");
}

#[tokio::test]
async fn test_relay_client_reports_error_field() {
    let upstream = mock_upstream::start(503, r#"{"detail":"overloaded"}"#).await;
    let base = relay_for(&upstream.url).await;

    let client = RelayClient::new(&base).unwrap();
    match client.generate("a cat").await {
        Err(RelayError::Relay(message)) => {
            assert!(message.contains("503"));
            assert!(message.contains("overloaded"));
        }
        other => panic!("expected relay error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_relay_client_without_error_field() {
    // unknown route: axum answers 404 with an empty body
    let base = serve_relay(AppState::new_for_test()).await;
    let client = RelayClient::new(&format!("{}/missing", base)).unwrap();

    match client.generate("a cat").await {
        Err(RelayError::Relay(message)) => {
            assert!(message.starts_with("Failed to generate image"));
            assert!(message.contains("404"));
        }
        other => panic!("expected relay error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_session_over_relay_missing_url() {
    let upstream = mock_upstream::start(200, r#"{"seed": 7}"#).await;
    let base = relay_for(&upstream.url).await;

    let mut session = PromptSession::new(RelayClient::new(&base).unwrap());
    session.set_prompt("a cat");
    let result = session.generate().await;

    assert_eq!(
        result,
        Some(GenerationResult::Error("No image URL in response".to_string()))
    );
    assert!(session.image_url().is_none());
}
