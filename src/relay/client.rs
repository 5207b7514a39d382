// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client for the hosted fal.ai image-generation endpoint

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::error::RelayError;
use super::generator::ImageGenerator;
use super::request::UpstreamRequest;
use crate::config::RelayConfig;

/// One-shot client for the upstream image-generation API.
///
/// Each call makes exactly one POST. There is no retry, no cache, and no
/// client-side timeout: the call resolves when the upstream answers or the
/// connection fails.
pub struct FalClient {
    client: Client,
    endpoint: String,
    api_key: String,
    image_size: String,
}

impl FalClient {
    /// Create a new FalClient
    pub fn new(endpoint: &str, api_key: &str, image_size: &str) -> Result<Self, RelayError> {
        if api_key.trim().is_empty() {
            return Err(RelayError::NotConfigured("empty API key".to_string()));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| RelayError::NotConfigured(e.to_string()))?;

        info!(
            "Image relay configured: endpoint={}, image_size={}",
            endpoint, image_size
        );

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            image_size: image_size.to_string(),
        })
    }

    /// Create a client from validated configuration
    pub fn from_config(config: &RelayConfig) -> Result<Self, RelayError> {
        config
            .validate()
            .map_err(|e| RelayError::NotConfigured(e.to_string()))?;
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| RelayError::NotConfigured("FAL_KEY is not set".to_string()))?;
        Self::new(&config.endpoint, api_key, &config.image_size)
    }

    /// Build the upstream body for `prompt`
    pub fn build_request(&self, prompt: &str) -> UpstreamRequest {
        UpstreamRequest::new(prompt, self.image_size.clone())
    }

    /// Send one generation request and return the upstream JSON verbatim
    pub async fn generate(&self, prompt: &str) -> Result<Value, RelayError> {
        let body = self.build_request(prompt);
        debug!(
            "Upstream generate POST {} (prompt_len={})",
            self.endpoint,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Key {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Upstream request failed: {}", e);
                RelayError::from_transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Failed to read upstream error body (status={}): {}", status, e);
                    String::new()
                }
            };
            let err = RelayError::upstream(status, &text);
            warn!("Upstream returned error: {}", err);
            return Err(err);
        }

        let data: Value = response.json().await.map_err(|e| {
            warn!("Upstream response unreadable: {}", e);
            RelayError::from_transport(e)
        })?;

        info!("Upstream generation succeeded: status={}", status.as_u16());
        Ok(data)
    }
}

#[async_trait]
impl ImageGenerator for FalClient {
    async fn generate(&self, prompt: &str) -> Result<Value, RelayError> {
        FalClient::generate(self, prompt).await
    }

    fn name(&self) -> &'static str {
        "fal"
    }
}
