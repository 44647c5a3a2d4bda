//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                        - Store health and provider mode (public)
//! - `/api/analysis`, `/api/recommendation` - Optional bearer session
//! - `/api/restore`, `/api/options`, `/api/auth/{signup,login,guest}` - Public
//! - `/api/auth/{logout,me}`, `/api/history/*` - Bearer session required
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on provider-backed routes
//! - **Sessions** - Bearer token resolved against the session store
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// API route groups with session middleware attached but no rate limiting.
pub struct ApiRoutes {
    /// Routes that may call the generation provider.
    pub generation: Router<AppState>,
    /// Everything else.
    pub standard: Router<AppState>,
}

impl ApiRoutes {
    pub fn new(state: &AppState) -> Self {
        let generation = api::routes::generation_routes()
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::optional_layer,
            ))
            .merge(api::routes::restore_routes());

        let member = api::routes::member_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

        let standard = api::routes::public_routes().merge(member);

        Self {
            generation,
            standard,
        }
    }

    /// Both groups merged without rate limiting.
    ///
    /// Rate limiting keys on the peer address, which in-process test clients
    /// do not provide.
    pub fn into_router(self) -> Router<AppState> {
        self.generation.merge(self.standard)
    }
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api = ApiRoutes::new(&state);

    let api_router = Router::new()
        .merge(api.generation.layer(rate_limit::generation_layer()))
        .merge(api.standard.layer(rate_limit::layer()));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
