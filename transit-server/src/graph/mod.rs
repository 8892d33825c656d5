//! Generic directed graph and shortest-path router.
//!
//! Nothing here knows about stops or lines: edges carry an arbitrary
//! label type, and the router only deals in vertex and edge indices.

mod directed;
mod router;

pub use directed::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
pub use router::{RouteInfo, Router};
