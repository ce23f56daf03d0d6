//! Models Module
//!
//! Request and response DTOs for the lookup service API.

pub mod requests;
pub mod responses;

pub use requests::{validate_query, SuggestionQuery, MAX_QUERY_LENGTH};
pub use responses::{HealthResponse, LocationsResponse, StatsResponse};
