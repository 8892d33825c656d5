//! Journey planner over the bus network.
//!
//! The catalogue is turned into a route graph where waiting for a bus
//! and riding it are separate timed edges. Shortest paths are
//! precomputed once, and each query maps the chosen edges back to
//! wait/ride steps.

mod builder;
mod config;
mod itinerary;
mod transport_router;

pub use builder::{EdgeKind, RouteGraph, RouteGraphBuilder, StopVertices};
pub use config::{RoutingSettings, SettingsError};
pub use itinerary::{Itinerary, ItineraryItem};
pub use transport_router::TransportRouter;
