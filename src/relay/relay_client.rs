// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client for a running relay server's `/api/generate-image` endpoint

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::error::{RelayError, GENERIC_FAILURE};
use super::generator::ImageGenerator;

pub const GENERATE_IMAGE_PATH: &str = "/api/generate-image";

/// Calls the relay the same way the browser front end does
pub struct RelayClient {
    client: Client,
    url: String,
}

impl RelayClient {
    pub fn new(base_url: &str) -> Result<Self, RelayError> {
        let client = Client::builder()
            .build()
            .map_err(|e| RelayError::NotConfigured(e.to_string()))?;
        let url = format!("{}{}", base_url.trim_end_matches('/'), GENERATE_IMAGE_PATH);
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ImageGenerator for RelayClient {
    async fn generate(&self, prompt: &str) -> Result<Value, RelayError> {
        debug!("Relay generate POST {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "prompt": prompt }))
            .send()
            .await
            .map_err(RelayError::from_transport)?;

        let status = response.status();
        let body: Option<Value> = response.json().await.ok();

        if !status.is_success() {
            let message = body
                .as_ref()
                .and_then(|b| b.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}: {}", GENERIC_FAILURE, status));
            warn!("Relay returned {}: {}", status.as_u16(), message);
            return Err(RelayError::Relay(message));
        }

        body.ok_or(RelayError::MalformedResponse)
    }

    fn name(&self) -> &'static str {
        "relay"
    }
}
