//! API Routes
//!
//! Configures the Axum router with all lookup service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    city_handler, health_handler, preload_handler, stats_handler, suggestions_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cities/:name` - Full city lookup
/// - `GET /suggestions?q=` - Typeahead suggestions
/// - `POST /preload` - Warm the cache with popular cities
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: any origin, the search box is served from elsewhere
/// - Tracing: logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cities/:name", get(city_handler))
        .route("/suggestions", get(suggestions_handler))
        .route("/preload", post(preload_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
