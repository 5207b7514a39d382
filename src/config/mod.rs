// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Relay configuration sourced from environment variables

use std::env;
use std::fmt;

use thiserror::Error;

/// Default hosted image-generation endpoint
pub const DEFAULT_FAL_ENDPOINT: &str = "https://fal.run/fal-ai/fast-sdxl";
pub const DEFAULT_IMAGE_SIZE: &str = "square_hd";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Errors raised while validating configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("FAL_KEY is not set; export it or add it to .env")]
    MissingApiKey,

    #[error("invalid upstream endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("invalid listen address '{addr}'")]
    InvalidListenAddr { addr: String },

    #[error("image size must not be empty")]
    EmptyImageSize,
}

/// Configuration for the image request relay
#[derive(Clone)]
pub struct RelayConfig {
    /// Credential sent as `Authorization: Key <api_key>`
    pub api_key: Option<String>,
    /// Upstream image-generation URL
    pub endpoint: String,
    /// Size preset requested from the upstream
    pub image_size: String,
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Allowed CORS origins; `*` allows any
    pub cors_allowed_origins: Vec<String>,
}

impl RelayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_empty("FAL_KEY"),
            endpoint: non_empty("FAL_ENDPOINT").unwrap_or_else(|| DEFAULT_FAL_ENDPOINT.to_string()),
            image_size: non_empty("FAL_IMAGE_SIZE")
                .unwrap_or_else(|| DEFAULT_IMAGE_SIZE.to_string()),
            listen_addr: non_empty("RELAY_LISTEN_ADDR")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            cors_allowed_origins: non_empty("RELAY_CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_else(|| vec!["*".to_string()]),
        }
    }

    /// Validate everything needed to call the upstream
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_none() {
            return Err(ConfigError::MissingApiKey);
        }
        let url = url::Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.image_size.trim().is_empty() {
            return Err(ConfigError::EmptyImageSize);
        }
        Ok(())
    }

    /// Validate and additionally check the listen address parses
    pub fn validate_for_server(&self) -> Result<(), ConfigError> {
        self.validate()?;
        self.listen_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|_| ConfigError::InvalidListenAddr {
                addr: self.listen_addr.clone(),
            })?;
        Ok(())
    }
}

/// Whether an origin list allows any origin
pub fn allows_any_origin(origins: &[String]) -> bool {
    origins.iter().any(|o| o == "*")
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_FAL_ENDPOINT.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

// Keep the credential out of logs and panic messages
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("image_size", &self.image_size)
            .field("listen_addr", &self.listen_addr)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}
