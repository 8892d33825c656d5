//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query string for a route lookup.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Departure stop name
    pub from: String,

    /// Arrival stop name
    pub to: String,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
