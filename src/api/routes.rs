//! API Routes
//!
//! Configures the Axum router with all quote cache endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_state_handler, health_handler, lookup_handler, purge_handler, save_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /quotes/lookup` - Load cached quotes for a cart
/// - `PUT /quotes` - Store quotes for a cart
/// - `DELETE /cache` - Purge every quote entry
/// - `PUT /cache/state` - Enable or disable the quote cache
/// - `GET /stats` - Store statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/quotes/lookup", post(lookup_handler))
        .route("/quotes", put(save_handler))
        .route("/cache", delete(purge_handler))
        .route("/cache/state", put(cache_state_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
