// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Enhancement response types

use serde::{Deserialize, Serialize};

use crate::enhance::EnhancementOption;

/// Response from POST /api/enhance-prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnhanceResponse {
    /// Enhanced prompt
    pub prompt: String,
}

/// A labelled variation already applied to the request prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnhancementChoice {
    pub label: String,
    pub prompt: String,
}

impl EnhancementChoice {
    pub fn from_option(option: &EnhancementOption, base: &str) -> Self {
        Self {
            label: option.label.to_string(),
            prompt: option.apply(base),
        }
    }
}

/// Response from POST /api/enhancements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnhancementsResponse {
    #[serde(rename = "static")]
    pub static_options: Vec<EnhancementChoice>,
    pub dynamic: Vec<EnhancementChoice>,
    pub recommendations: Vec<EnhancementChoice>,
}
