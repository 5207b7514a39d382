// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt session: the display state of a single client
//!
//! Tracks the prompt being edited, the prompt that produced the current
//! image, the latest image URL and the latest error. A failed generation
//! replaces the error but never clears the previously shown image.

use tracing::{debug, info, warn};

use crate::enhance::{self, EnhancementOption};
use crate::relay::{extract_image_url, ImageGenerator, RelayError};

/// Outcome of a single generate call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Image(String),
    Error(String),
}

pub struct PromptSession<G> {
    generator: G,
    prompt: String,
    original_prompt: Option<String>,
    image_url: Option<String>,
    error: Option<String>,
    is_generating: bool,
}

impl<G: ImageGenerator> PromptSession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            prompt: String::new(),
            original_prompt: None,
            image_url: None,
            error: None,
            is_generating: false,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn original_prompt(&self) -> Option<&str> {
        self.original_prompt.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Replace the prompt with an enhanced version. No-op for blank input.
    pub fn enhance(&mut self) -> bool {
        match enhance::enhance_if_present(&self.prompt) {
            Some(enhanced) => {
                self.prompt = enhanced;
                true
            }
            None => false,
        }
    }

    /// Rewrite the prompt being edited with a style recommendation. No-op for blank input.
    pub fn apply_recommendation(&mut self, option: &EnhancementOption) -> bool {
        let base = self.prompt.trim();
        if base.is_empty() {
            return false;
        }
        self.prompt = option.apply(base);
        true
    }

    /// Variations available for the prompt that produced the current image
    pub fn dynamic_enhancements(&self) -> Vec<EnhancementOption> {
        self.original_prompt
            .as_deref()
            .map(enhance::dynamic_enhancements)
            .unwrap_or_default()
    }

    /// Generate from the current prompt, remembering it as the original
    pub async fn generate(&mut self) -> Option<GenerationResult> {
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            debug!("Generate skipped: prompt is blank");
            return None;
        }
        self.original_prompt = Some(prompt.clone());
        Some(self.run(&prompt).await)
    }

    /// Generate a variation of the original prompt. The original is kept.
    pub async fn generate_with(&mut self, option: &EnhancementOption) -> Option<GenerationResult> {
        let prompt = option.apply(self.original_prompt.as_deref()?);
        Some(self.run(&prompt).await)
    }

    async fn run(&mut self, prompt: &str) -> GenerationResult {
        self.is_generating = true;
        self.error = None;

        let outcome = self
            .generator
            .generate(prompt)
            .await
            .and_then(|response| extract_image_url(&response));

        self.is_generating = false;
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: Result<String, RelayError>) -> GenerationResult {
        match outcome {
            Ok(url) => {
                info!("Image ready via {}", self.generator.name());
                self.image_url = Some(url.clone());
                GenerationResult::Image(url)
            }
            Err(e) => {
                warn!("Image generation failed via {}: {}", self.generator.name(), e);
                let message = e.to_string();
                self.error = Some(message.clone());
                GenerationResult::Error(message)
            }
        }
    }
}
