//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, provider setup, and Axum server lifecycle.

use crate::application::services::AnalysisService;
use crate::config::Config;
use crate::infrastructure::provider::{GeminiProvider, GenerationProvider};
use crate::infrastructure::store::{InMemoryStore, KeyValueStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Picks Redis when configured and reachable, the in-memory store otherwise.
pub async fn connect_store(config: &Config) -> Arc<dyn KeyValueStore> {
    if let Some(redis_url) = &config.redis_url {
        match RedisStore::connect(redis_url, &config.store_key_prefix).await {
            Ok(redis) => {
                tracing::info!("Store enabled (Redis)");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to connect to Redis: {}. Accounts and history will not survive a restart.",
                    e
                );
            }
        }
    } else {
        tracing::info!("Store: in-memory (Redis not configured)");
    }

    Arc::new(InMemoryStore::new())
}

/// Builds the analysis service, live when an API key is configured.
///
/// # Errors
///
/// Returns an error if the HTTP client for the provider cannot be built.
pub fn build_analysis_service(config: &Config) -> Result<AnalysisService> {
    let provider: Option<Arc<dyn GenerationProvider>> = match &config.api_key {
        Some(key) => {
            let gemini = GeminiProvider::new(
                key.as_str(),
                &config.model,
                &config.provider_base_url,
                config.provider_timeout(),
            )
            .context("failed to build the Gemini client")?;
            Some(Arc::new(gemini))
        }
        None => {
            tracing::warn!("No API key configured: serving demo results");
            None
        }
    };

    Ok(AnalysisService::new(
        provider,
        config.analysis_demo_delay(),
        config.recommendation_demo_delay(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Key-value store (Redis or in-memory fallback)
/// - Generation provider (Gemini or demo mode)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The provider client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await;
    let analysis_service = build_analysis_service(&config)?;
    let model = config.is_live().then(|| config.model.clone());

    let state = AppState::new(
        store,
        analysis_service,
        config.credential_secret.clone(),
        model,
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C. In-flight requests are allowed to finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
