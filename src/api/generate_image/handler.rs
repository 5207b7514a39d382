// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::request::GenerateImageRequest;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/generate-image - Relay a prompt to the image provider
///
/// Pipeline:
/// 1. Parse and validate request (400 on blank prompt)
/// 2. Get FalClient from AppState (503 if absent)
/// 3. Make one upstream call
/// 4. Return the upstream JSON verbatim, or 500 with `{error}`
pub async fn generate_image_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Image generation request rejected: {}", rejection.body_text());
        ApiError::InvalidRequest(rejection.body_text())
    })?;

    debug!(
        "Image generation request received: prompt_len={}",
        request.prompt.len()
    );

    // 1. Validate request
    if let Err(e) = request.validate() {
        warn!("Image generation validation failed: {}", e);
        return Err(ApiError::InvalidRequest(e));
    }

    // 2. Get relay client (503 if None)
    let client = state.fal_client.as_ref().ok_or_else(|| {
        warn!("Image relay not configured");
        ApiError::ServiceUnavailable("Image relay is not configured".to_string())
    })?;

    // 3. Relay
    let start = std::time::Instant::now();
    let data = client.generate(&request.prompt).await.map_err(|e| {
        warn!("Image generation failed: {}", e);
        ApiError::Relay(e)
    })?;

    info!("Image generated in {}ms", start.elapsed().as_millis());

    // 4. Verbatim
    Ok(Json(data))
}
