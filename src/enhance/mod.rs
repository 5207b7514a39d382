// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt enhancement by appending sampled descriptive phrases
//!
//! The enhancer inspects the lowercased prompt for a few keyword groups and
//! appends comma-separated phrases drawn from fixed category lists:
//! 1. Scenic prompts get 2 composition phrases
//! 2. Prompts that don't already mention light get 1 lighting phrase
//! 3. Every prompt gets 2 quality phrases
//! 4. Artistic prompts get 2 style phrases

pub mod options;
pub mod patterns;
pub mod sampler;

use rand::Rng;
use tracing::debug;

pub use options::{
    dynamic_enhancements, recommendations, static_enhancements, EnhancementOption,
};
pub use patterns::PhraseCategory;
pub use sampler::sample_distinct;

use patterns::{mentions_any, ARTISTIC_KEYWORDS, LIGHTING_KEYWORDS, SCENIC_KEYWORDS};

/// One group of phrases appended to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancementSegment {
    pub category: PhraseCategory,
    pub phrases: Vec<&'static str>,
}

/// Decide which categories apply to `base` and sample their phrases
pub fn plan_enhancement<R: Rng + ?Sized>(base: &str, rng: &mut R) -> Vec<EnhancementSegment> {
    let lower = base.to_lowercase();
    let mut categories = Vec::with_capacity(4);

    if mentions_any(&lower, SCENIC_KEYWORDS) {
        categories.push(PhraseCategory::Composition);
    }
    if !mentions_any(&lower, LIGHTING_KEYWORDS) {
        categories.push(PhraseCategory::Lighting);
    }
    categories.push(PhraseCategory::Quality);
    if mentions_any(&lower, ARTISTIC_KEYWORDS) {
        categories.push(PhraseCategory::Style);
    }

    categories
        .into_iter()
        .map(|category| EnhancementSegment {
            category,
            phrases: sample_distinct(category.phrases(), category.sample_count(), rng)
                .into_iter()
                .copied()
                .collect(),
        })
        .collect()
}

/// Enhance `base` using the supplied random source
pub fn enhance_prompt_with<R: Rng + ?Sized>(base: &str, rng: &mut R) -> String {
    let segments = plan_enhancement(base, rng);
    let mut enhanced = String::from(base);
    for segment in &segments {
        enhanced.push_str(", ");
        enhanced.push_str(&segment.phrases.join(", "));
    }
    debug!(
        "Prompt enhanced: base_len={}, segments={}, enhanced_len={}",
        base.len(),
        segments.len(),
        enhanced.len()
    );
    enhanced
}

/// Enhance `base` with the thread-local RNG. Output is not reproducible.
pub fn enhance_prompt(base: &str) -> String {
    enhance_prompt_with(base, &mut rand::thread_rng())
}

/// Trim and enhance, or `None` when there is nothing to enhance
pub fn enhance_if_present(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(enhance_prompt(trimmed))
}
