// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::http_server::AppState;
use crate::version;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
}

/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let issues = if state.fal_client.is_none() {
        Some(vec!["image relay is not configured".to_string()])
    } else {
        None
    };

    Json(HealthResponse {
        status: if issues.is_none() { "ok" } else { "degraded" }.to_string(),
        version: version::VERSION_NUMBER.to_string(),
        issues,
    })
}

/// GET /version
pub async fn version_handler() -> Json<Value> {
    Json(version::get_version_info())
}
