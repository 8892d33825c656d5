//! Request processing error types.

use crate::domain::CatalogueError;
use crate::planner::SettingsError;

/// Errors that abort processing of a request document.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Reading the document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or has the wrong shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The network description is inconsistent
    #[error("catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),

    /// Routing settings are unusable
    #[error("routing settings error: {0}")]
    Settings(#[from] SettingsError),

    /// A route was requested but the document has no routing settings
    #[error("route requested without routing_settings")]
    MissingRoutingSettings,
}
