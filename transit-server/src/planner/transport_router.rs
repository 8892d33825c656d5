//! Stop-to-stop journey queries.

use tracing::{debug, info};

use super::builder::{EdgeKind, RouteGraph, RouteGraphBuilder};
use super::config::RoutingSettings;
use super::itinerary::{Itinerary, ItineraryItem};
use crate::catalogue::TransportCatalogue;
use crate::graph::Router;

/// Answers fastest-journey queries over a catalogue.
///
/// Built once after the catalogue is complete, then read-only. It holds
/// stop and line indices only, so queries take the catalogue it was built
/// from to resolve names.
#[derive(Debug, Clone)]
pub struct TransportRouter {
    settings: RoutingSettings,
    route_graph: RouteGraph,
    router: Router,
}

impl TransportRouter {
    /// Build the route graph and precompute all shortest paths.
    pub fn build(catalogue: &TransportCatalogue, settings: RoutingSettings) -> Self {
        let route_graph = RouteGraphBuilder::new(catalogue, settings).build();
        let router = Router::new(route_graph.graph());

        info!(
            stops = route_graph.stop_count(),
            wait_time = settings.bus_wait_time,
            velocity = settings.bus_velocity,
            "transport router ready"
        );

        Self {
            settings,
            route_graph,
            router,
        }
    }

    /// Returns the settings the router was built with.
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Returns the route graph.
    pub fn route_graph(&self) -> &RouteGraph {
        &self.route_graph
    }

    /// Find the fastest journey between two named stops.
    ///
    /// Returns `None` when either stop is unknown, is not served by any
    /// line, or when no journey connects them. Asking for a journey from
    /// a served stop to itself yields an empty itinerary.
    ///
    /// `catalogue` must be the catalogue the router was built from.
    pub fn find_route(
        &self,
        catalogue: &TransportCatalogue,
        from: &str,
        to: &str,
    ) -> Option<Itinerary> {
        let from_vertices = self.route_graph.vertices(catalogue.find_stop_id(from)?)?;
        let to_vertices = self.route_graph.vertices(catalogue.find_stop_id(to)?)?;

        let Some(route) = self.router.build_route(from_vertices.wait, to_vertices.wait) else {
            debug!(from, to, "no route between stops");
            return None;
        };

        let graph = self.route_graph.graph();
        let items = route
            .edges
            .iter()
            .map(|&edge_id| {
                let edge = graph.edge(edge_id);
                match edge.kind {
                    EdgeKind::Wait { stop } => ItineraryItem::Wait {
                        stop_name: catalogue.stop(stop).name.clone(),
                        time: edge.weight,
                    },
                    EdgeKind::Ride { line, span_count } => ItineraryItem::Ride {
                        line: catalogue.line(line).name().to_string(),
                        span_count,
                        time: edge.weight,
                    },
                }
            })
            .collect();

        let itinerary = Itinerary::new(items);
        debug!(
            from,
            to,
            total_time = itinerary.total_time(),
            rides = itinerary.ride_count(),
            "route found"
        );
        Some(itinerary)
    }
}
