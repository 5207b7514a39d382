// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt enhancement API endpoints
//!
//! Provides POST /api/enhance-prompt and POST /api/enhancements.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{enhance_prompt_handler, enhancements_handler};
pub use request::EnhanceRequest;
pub use response::{EnhanceResponse, EnhancementChoice, EnhancementsResponse};
