// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image request relay: forwards prompts to the hosted image-generation API

pub mod client;
pub mod error;
pub mod generator;
pub mod relay_client;
pub mod request;

pub use client::FalClient;
pub use error::{RelayError, GENERIC_FAILURE, NO_IMAGE_URL};
pub use generator::{extract_image_url, ImageGenerator};
pub use relay_client::RelayClient;
pub use request::UpstreamRequest;
