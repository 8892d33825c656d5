//! Application state for the web layer.

use std::sync::Arc;

use crate::catalogue::TransportCatalogue;
use crate::planner::{RoutingSettings, TransportRouter};

/// Shared application state.
///
/// The catalogue and router are immutable once the server starts, so
/// handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// Stops, lines and distances
    pub catalogue: Arc<TransportCatalogue>,

    /// Precomputed journeys over the catalogue
    pub router: Arc<TransportRouter>,
}

impl AppState {
    /// Create a new app state, building the router up front.
    pub fn new(catalogue: TransportCatalogue, settings: RoutingSettings) -> Self {
        let router = TransportRouter::build(&catalogue, settings);
        Self {
            catalogue: Arc::new(catalogue),
            router: Arc::new(router),
        }
    }
}
