// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod enhance;
pub mod errors;
pub mod generate_image;
pub mod handlers;
pub mod http_server;

pub use enhance::{
    enhance_prompt_handler, enhancements_handler, EnhanceRequest, EnhanceResponse,
    EnhancementChoice, EnhancementsResponse,
};
pub use errors::{ApiError, ErrorResponse};
pub use generate_image::{generate_image_handler, GenerateImageRequest};
pub use handlers::{health_handler, version_handler, HealthResponse};
pub use http_server::{create_app, start_server, AppState};
