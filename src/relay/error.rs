// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Relay error types

use thiserror::Error;

/// Message shown when a generation succeeded but carried no image
pub const NO_IMAGE_URL: &str = "No image URL in response";

/// Fallback message when nothing more specific is known
pub const GENERIC_FAILURE: &str = "Failed to generate image";

/// Errors that can occur while relaying an image generation request
#[derive(Debug, Error)]
pub enum RelayError {
    /// Upstream answered with status >= 400
    #[error("FAL API error: {status} {reason}{}", detail_suffix(.detail))]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        reason: String,
        /// Upstream JSON body, compacted, when it parsed
        detail: Option<String>,
    },

    /// Request never got a response
    #[error("Failed to generate image: {0}")]
    Transport(String),

    /// Upstream returned success with a body that isn't JSON
    #[error("Failed to generate image: upstream returned an unreadable response")]
    MalformedResponse,

    /// Generation response had no `images[0].url`
    #[error("No image URL in response")]
    MissingImageUrl,

    /// Error reported by a relay server in its `{error}` body
    #[error("{0}")]
    Relay(String),

    /// Credential missing or unusable
    #[error("relay is not configured: {0}")]
    NotConfigured(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" - {}", d),
        None => String::new(),
    }
}

impl RelayError {
    /// Build an upstream error from a status code and the raw response body
    pub fn upstream(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .map(|v| v.to_string());
        RelayError::Upstream {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
            detail,
        }
    }

    /// Map a reqwest failure into the relay taxonomy
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RelayError::MalformedResponse
        } else {
            RelayError::Transport(err.to_string())
        }
    }
}
