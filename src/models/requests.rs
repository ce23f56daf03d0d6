//! Request DTOs for the lookup service API
//!
//! Defines the query strings accepted by the HTTP endpoints.

use serde::Deserialize;

/// Maximum accepted query length in bytes
pub const MAX_QUERY_LENGTH: usize = 256;

/// Query string for the suggestions endpoint (GET /suggestions?q=...)
///
/// A missing `q` is treated as empty input and yields no suggestions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionQuery {
    /// Partially typed city name
    #[serde(default)]
    pub q: String,
}

/// Validates a raw city query
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_query(query: &str) -> Option<String> {
    if query.len() > MAX_QUERY_LENGTH {
        return Some(format!(
            "Query exceeds maximum length of {} bytes",
            MAX_QUERY_LENGTH
        ));
    }
    None
}
