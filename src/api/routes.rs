//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{cache_listing_handler, health_handler, lookup_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// This is also the entry point for hosts that embed the proxy instead of
/// letting the binary bind a listener.
///
/// # Endpoints
/// - `GET /dl/:id` - Cached upstream lookup
/// - `GET /api/cache` - Live cache entries with remaining lifetime
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/dl/:id", get(lookup_handler))
        .route("/api/cache", get(cache_listing_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
