// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod enhance;
pub mod relay;
pub mod session;
pub mod version;

pub use config::{ConfigError, RelayConfig};
pub use enhance::{enhance_prompt, enhance_prompt_with, EnhancementOption};
pub use relay::{FalClient, ImageGenerator, RelayClient, RelayError};
pub use session::{GenerationResult, PromptSession};
