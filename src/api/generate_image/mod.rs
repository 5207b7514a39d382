// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation API endpoint module
//!
//! Provides POST /api/generate-image, relaying prompts to the hosted provider.

pub mod handler;
pub mod request;

pub use handler::generate_image_handler;
pub use request::GenerateImageRequest;
