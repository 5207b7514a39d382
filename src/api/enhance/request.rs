// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Body shared by the enhancement endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceRequest {
    pub prompt: String,
}

impl EnhanceRequest {
    /// Trimmed prompt, or an error when blank
    pub fn trimmed_prompt(&self) -> Result<&str, String> {
        let trimmed = self.prompt.trim();
        if trimmed.is_empty() {
            return Err("prompt must not be empty".to_string());
        }
        Ok(trimmed)
    }
}
