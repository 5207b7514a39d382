// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt enhancement endpoint handlers

use axum::{extract::rejection::JsonRejection, Json};
use tracing::{debug, warn};

use super::request::EnhanceRequest;
use super::response::{EnhanceResponse, EnhancementChoice, EnhancementsResponse};
use crate::api::errors::ApiError;
use crate::enhance::{self, EnhancementOption};

fn parse(payload: Result<Json<EnhanceRequest>, JsonRejection>) -> Result<EnhanceRequest, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Enhancement request rejected: {}", rejection.body_text());
        ApiError::InvalidRequest(rejection.body_text())
    })?;
    Ok(request)
}

/// POST /api/enhance-prompt - Append sampled phrases to a prompt
pub async fn enhance_prompt_handler(
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, ApiError> {
    let request = parse(payload)?;
    let base = request.trimmed_prompt().map_err(ApiError::InvalidRequest)?;

    let prompt = enhance::enhance_prompt(base);
    debug!(
        "Enhanced prompt: base_len={}, enhanced_len={}",
        base.len(),
        prompt.len()
    );
    Ok(Json(EnhanceResponse { prompt }))
}

/// POST /api/enhancements - List every labelled variation for a prompt
pub async fn enhancements_handler(
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhancementsResponse>, ApiError> {
    let request = parse(payload)?;
    let base = request.trimmed_prompt().map_err(ApiError::InvalidRequest)?;

    let choices = |options: &[EnhancementOption]| -> Vec<EnhancementChoice> {
        options
            .iter()
            .map(|o| EnhancementChoice::from_option(o, base))
            .collect()
    };

    Ok(Json(EnhancementsResponse {
        static_options: choices(enhance::static_enhancements()),
        dynamic: choices(enhance::dynamic_enhancements(base).as_slice()),
        recommendations: choices(enhance::recommendations()),
    }))
}
