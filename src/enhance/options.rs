// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Labelled one-click prompt variations

use serde::Serialize;

use super::patterns::mentions_any;

/// A labelled transform that appends a fixed suffix to a base prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnhancementOption {
    pub label: &'static str,
    #[serde(skip)]
    suffix: &'static str,
}

impl EnhancementOption {
    pub const fn new(label: &'static str, suffix: &'static str) -> Self {
        Self { label, suffix }
    }

    /// Produce the varied prompt for `base`
    pub fn apply(&self, base: &str) -> String {
        format!("{}, {}", base, self.suffix)
    }
}

const STATIC_ENHANCEMENTS: &[EnhancementOption] = &[
    EnhancementOption::new(
        "Add more details",
        "highly detailed, intricate details, 8k resolution, professional photography",
    ),
    EnhancementOption::new(
        "Make it more realistic",
        "photorealistic, hyperrealistic, professional photography, natural lighting",
    ),
    EnhancementOption::new(
        "Make it artistic",
        "artistic style, vibrant colors, creative composition, dramatic lighting",
    ),
    EnhancementOption::new(
        "Cinematic look",
        "cinematic, dramatic lighting, movie scene, wide angle, depth of field",
    ),
];

const RECOMMENDATIONS: &[EnhancementOption] = &[
    EnhancementOption::new(
        "Artistic Style",
        "artistic style, vibrant colors, creative composition",
    ),
    EnhancementOption::new(
        "Photorealistic",
        "photorealistic, highly detailed, 8K resolution",
    ),
    EnhancementOption::new(
        "Fantasy",
        "fantasy art style, magical atmosphere, ethereal lighting",
    ),
    EnhancementOption::new(
        "Cinematic",
        "cinematic composition, dramatic lighting, movie scene quality",
    ),
    EnhancementOption::new(
        "Minimalist",
        "minimalist style, clean lines, simple composition",
    ),
];

pub const SUNSET: EnhancementOption = EnhancementOption::new(
    "Sunset version",
    "during golden hour sunset, warm colors, dramatic sky",
);

pub const MISTY: EnhancementOption = EnhancementOption::new(
    "Misty atmosphere",
    "with morning mist, atmospheric fog, ethereal lighting",
);

pub const AUTUMN: EnhancementOption = EnhancementOption::new(
    "Autumn colors",
    "in autumn, fall colors, golden leaves, warm tones",
);

/// Variations offered for every prompt
pub fn static_enhancements() -> &'static [EnhancementOption] {
    STATIC_ENHANCEMENTS
}

/// Style presets offered alongside the static variations
pub fn recommendations() -> &'static [EnhancementOption] {
    RECOMMENDATIONS
}

/// Variations that depend on what the original prompt describes
pub fn dynamic_enhancements(original_prompt: &str) -> Vec<EnhancementOption> {
    let lower = original_prompt.to_lowercase();
    let mut options = Vec::new();

    // time of day, for scenery
    if mentions_any(&lower, &["landscape", "scene", "view", "nature"]) {
        options.push(SUNSET);
    }

    if !lower.contains("indoor") {
        options.push(MISTY);
    }

    // seasonal
    if mentions_any(&lower, &["nature", "outdoor", "landscape"]) {
        options.push(AUTUMN);
    }

    options
}
