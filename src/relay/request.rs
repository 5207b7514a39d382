// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upstream request body

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_IMAGE_SIZE;

fn default_image_size() -> String {
    DEFAULT_IMAGE_SIZE.to_string()
}

fn default_sync_mode() -> bool {
    true
}

fn default_num_images() -> u32 {
    1
}

/// Body posted to the hosted image-generation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamRequest {
    pub prompt: String,
    #[serde(default = "default_image_size")]
    pub image_size: String,
    /// Wait for the image instead of receiving a queue handle
    #[serde(default = "default_sync_mode")]
    pub sync_mode: bool,
    #[serde(default = "default_num_images")]
    pub num_images: u32,
}

impl UpstreamRequest {
    /// Single synchronous image at the given size preset
    pub fn new(prompt: impl Into<String>, image_size: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image_size: image_size.into(),
            sync_mode: default_sync_mode(),
            num_images: default_num_images(),
        }
    }
}
