//! Transit catalogue: stops, lines and road distances.
//!
//! The catalogue is populated once (stops, then distances, then lines)
//! and treated as read-only afterwards by the route graph builder and
//! the query layers.

mod distances;
mod stats;
mod transport;

pub use distances::DistanceTable;
pub use stats::LineStatistics;
pub use transport::TransportCatalogue;
