// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::enhance::{enhance_prompt_handler, enhancements_handler};
use super::generate_image::generate_image_handler;
use super::handlers::{health_handler, version_handler};
use crate::config::{allows_any_origin, RelayConfig};
use crate::relay::FalClient;

/// Shared, read-only state for every request
pub struct AppState {
    /// Upstream client; `None` makes generate requests answer 503
    pub fal_client: Option<Arc<FalClient>>,
    pub cors_allowed_origins: Vec<String>,
}

impl AppState {
    pub fn new(fal_client: FalClient, cors_allowed_origins: Vec<String>) -> Self {
        Self {
            fal_client: Some(Arc::new(fal_client)),
            cors_allowed_origins,
        }
    }

    /// Build state from configuration, leaving the client out if the
    /// credential is missing or invalid
    pub fn from_config(config: &RelayConfig) -> Self {
        let fal_client = match FalClient::from_config(config) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                warn!("Image relay disabled: {}", e);
                None
            }
        };
        Self {
            fal_client,
            cors_allowed_origins: config.cors_allowed_origins.clone(),
        }
    }

    pub fn new_for_test() -> Self {
        Self {
            fal_client: None,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allows_any_origin(origins) {
        return layer.allow_origin(Any);
    }
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(parsed))
}

pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.cors_allowed_origins);

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        // Relay endpoint
        .route("/api/generate-image", post(generate_image_handler))
        // Enhancement endpoints
        .route("/api/enhance-prompt", post(enhance_prompt_handler))
        .route("/api/enhancements", post(enhancements_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: RelayConfig) -> anyhow::Result<()> {
    let addr = config.listen_addr.parse::<SocketAddr>()?;
    let state = Arc::new(AppState::from_config(&config));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "API server listening on {} ({})",
        listener.local_addr()?,
        crate::version::VERSION
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
