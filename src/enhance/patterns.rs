// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fixed phrase lists and trigger keywords used by the prompt enhancer

/// Framing phrases, added for scenic prompts
pub const COMPOSITION: &[&str] = &[
    "with professional composition",
    "perfectly framed",
    "dynamic perspective",
    "rule of thirds",
    "golden ratio composition",
];

/// Lighting phrases, added unless the prompt already talks about light
pub const LIGHTING: &[&str] = &[
    "dramatic lighting",
    "cinematic lighting",
    "natural lighting",
    "volumetric lighting",
    "ambient lighting",
];

/// Quality phrases, always added
pub const QUALITY: &[&str] = &[
    "highly detailed",
    "8K resolution",
    "photorealistic",
    "masterpiece",
    "professional photography",
];

/// Style phrases, added for artistic prompts
pub const STYLE: &[&str] = &[
    "trending on artstation",
    "award winning",
    "hyperrealistic",
    "ultra realistic",
    "professional quality",
];

pub const SCENIC_KEYWORDS: &[&str] = &["landscape", "portrait", "scene", "view"];
pub const LIGHTING_KEYWORDS: &[&str] = &["lighting", "dark", "bright"];
pub const ARTISTIC_KEYWORDS: &[&str] = &["art", "style", "design"];

/// Number of phrases drawn from each category
pub const COMPOSITION_COUNT: usize = 2;
pub const LIGHTING_COUNT: usize = 1;
pub const QUALITY_COUNT: usize = 2;
pub const STYLE_COUNT: usize = 2;

/// Phrase category a suffix segment was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseCategory {
    Composition,
    Lighting,
    Quality,
    Style,
}

impl PhraseCategory {
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            PhraseCategory::Composition => COMPOSITION,
            PhraseCategory::Lighting => LIGHTING,
            PhraseCategory::Quality => QUALITY,
            PhraseCategory::Style => STYLE,
        }
    }

    pub fn sample_count(self) -> usize {
        match self {
            PhraseCategory::Composition => COMPOSITION_COUNT,
            PhraseCategory::Lighting => LIGHTING_COUNT,
            PhraseCategory::Quality => QUALITY_COUNT,
            PhraseCategory::Style => STYLE_COUNT,
        }
    }

    /// Whether `phrase` belongs to this category's list
    pub fn contains(self, phrase: &str) -> bool {
        self.phrases().contains(&phrase)
    }
}

/// True if the lowercased prompt contains any of `keywords` as a substring
pub fn mentions_any(lowercase_prompt: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowercase_prompt.contains(k))
}
