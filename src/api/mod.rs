//! API Module
//!
//! HTTP handlers and routing for the city lookup REST API.
//!
//! # Endpoints
//! - `GET /cities/:name` - Full city lookup
//! - `GET /suggestions?q=` - Typeahead suggestions
//! - `POST /preload` - Warm the cache with popular cities
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
