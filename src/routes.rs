//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check
//! - everything else - Trivia API, see [`crate::api::routes::api_routes`]
//!
//! # Middleware
//!
//! - **CORS** - Any origin, credentials allowed
//! - **Tracing** - Structured request/response logging
//!
//! Unknown paths answer with the 404 envelope and known paths called with an
//! unsupported method answer with the 405 envelope.

use crate::api;
use crate::api::handlers::{health_handler, method_not_allowed_handler, not_found_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(tracing::layer())
        .layer(cors::layer())
}
