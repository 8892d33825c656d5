//! Catalogue error types.
//!
//! These errors represent rejected mutations of the transit catalogue.
//! Read-only lookups never fail; they report absence through `Option`
//! or sentinel values instead.

/// Errors raised while populating the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop with this name was already added
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// A line with this name was already added
    #[error("duplicate line: {0}")]
    DuplicateLine(String),

    /// A line or distance references a stop that was never added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A query references a line that was never added
    #[error("unknown line: {0}")]
    UnknownLine(String),

    /// A line was declared without any stops
    #[error("line {0} has no stops")]
    EmptyLine(String),

    /// Road distances must be non-negative and fit in 32 bits
    #[error("invalid distance {distance} from {from} to {to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: i64,
    },
}
