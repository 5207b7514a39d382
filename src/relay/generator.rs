// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generator trait and response helpers

use async_trait::async_trait;
use serde_json::Value;

use super::error::RelayError;

/// Anything that turns a prompt into an image-generation response body
///
/// Implemented by [`FalClient`](super::FalClient), which calls the upstream
/// directly, and [`RelayClient`](super::RelayClient), which goes through a
/// running relay server.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate an image and return the provider's JSON body unchanged
    async fn generate(&self, prompt: &str) -> Result<Value, RelayError>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}

/// Pull `images[0].url` out of a generation response
pub fn extract_image_url(response: &Value) -> Result<String, RelayError> {
    response
        .get("images")
        .and_then(|images| images.get(0))
        .and_then(|first| first.get("url"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .ok_or(RelayError::MissingImageUrl)
}
