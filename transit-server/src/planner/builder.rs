//! Route graph construction.
//!
//! Every served stop becomes two vertices: a *wait* vertex (standing at
//! the stop, not yet on a bus) and a *board* vertex (on a bus at the
//! stop). A wait edge links them with the fixed boarding wait; ride edges
//! go from a board vertex to the wait vertex of any later stop on the
//! same line, so that every change of bus pays the wait again.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use super::config::RoutingSettings;
use crate::catalogue::TransportCatalogue;
use crate::domain::{Line, LineId, StopId};
use crate::graph::{DirectedWeightedGraph, Edge, VertexId};

/// What an edge of the route graph stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Waiting for a bus at a stop.
    Wait { stop: StopId },

    /// Riding a line for `span_count` stop-to-stop hops.
    Ride { line: LineId, span_count: usize },
}

/// The two vertices allocated to a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    /// Waiting at the stop (even id).
    pub wait: VertexId,
    /// On a bus at the stop (odd id, `wait + 1`).
    pub board: VertexId,
}

/// Route graph plus the stop/vertex mapping it was built with.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    graph: DirectedWeightedGraph<EdgeKind>,
    vertices: HashMap<StopId, StopVertices>,
    /// Stop owning each vertex pair, indexed by `vertex / 2`.
    stops_by_pair: Vec<StopId>,
}

impl RouteGraph {
    /// Returns the underlying graph.
    pub fn graph(&self) -> &DirectedWeightedGraph<EdgeKind> {
        &self.graph
    }

    /// Returns the vertices of a served stop.
    pub fn vertices(&self, stop: StopId) -> Option<StopVertices> {
        self.vertices.get(&stop).copied()
    }

    /// Returns the stop a vertex belongs to.
    ///
    /// # Panics
    ///
    /// Panics if the vertex was never allocated.
    pub fn stop_at(&self, vertex: VertexId) -> StopId {
        self.stops_by_pair[vertex / 2]
    }

    /// Returns the number of stops that received vertices.
    pub fn stop_count(&self) -> usize {
        self.stops_by_pair.len()
    }
}

/// Builds a [`RouteGraph`] from a populated catalogue.
pub struct RouteGraphBuilder<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
}

impl<'a> RouteGraphBuilder<'a> {
    /// Create a new builder.
    pub fn new(catalogue: &'a TransportCatalogue, settings: RoutingSettings) -> Self {
        Self {
            catalogue,
            settings,
        }
    }

    /// Build the graph.
    ///
    /// Vertex numbering is deterministic: served stops are ordered by
    /// name, and the k-th stop gets wait vertex `2k` and board vertex
    /// `2k + 1`. Lines are added in catalogue order.
    pub fn build(&self) -> RouteGraph {
        let served: BTreeMap<&str, StopId> = self
            .catalogue
            .lines()
            .flat_map(|(_, line)| line.route().iter().copied())
            .map(|stop| (self.catalogue.stop(stop).name.as_str(), stop))
            .collect();

        let mut graph = DirectedWeightedGraph::new(served.len() * 2);
        let mut vertices = HashMap::with_capacity(served.len());
        let mut stops_by_pair = Vec::with_capacity(served.len());

        for (k, &stop) in served.values().enumerate() {
            let pair = StopVertices {
                wait: 2 * k,
                board: 2 * k + 1,
            };
            graph.add_edge(Edge {
                from: pair.wait,
                to: pair.board,
                weight: self.settings.wait_minutes(),
                kind: EdgeKind::Wait { stop },
            });
            vertices.insert(stop, pair);
            stops_by_pair.push(stop);
        }

        let mut route_graph = RouteGraph {
            graph,
            vertices,
            stops_by_pair,
        };

        for (id, line) in self.catalogue.lines() {
            self.add_line(&mut route_graph, id, line);
        }

        info!(
            stops = route_graph.stop_count(),
            vertices = route_graph.graph.vertex_count(),
            edges = route_graph.graph.edge_count(),
            "route graph built"
        );

        route_graph
    }

    /// Add the ride edges of one line.
    ///
    /// Only the forward run of the stored route is enumerated. For a
    /// non-roundtrip line each forward pair also gets the matching return
    /// edge, timed over the reverse road distances. For a roundtrip line
    /// each position also gets an edge back to its own wait vertex, timed
    /// as riding from that position to the end of the stored loop.
    fn add_line(&self, route_graph: &mut RouteGraph, id: LineId, line: &Line) {
        let route = line.route();
        let forward_len = line.forward_len();
        let before = route_graph.graph.edge_count();

        for i in 0..forward_len {
            let origin = route_graph.vertices[&route[i]];
            let mut forward_metres = 0.0;
            let mut backward_metres = 0.0;

            for j in (i + 1)..forward_len {
                let target = route_graph.vertices[&route[j]];
                let span_count = j - i;

                forward_metres += self.catalogue.distance(route[j - 1], route[j]);
                route_graph.graph.add_edge(Edge {
                    from: origin.board,
                    to: target.wait,
                    weight: self.settings.travel_minutes(forward_metres),
                    kind: EdgeKind::Ride { line: id, span_count },
                });

                if !line.is_roundtrip() {
                    backward_metres += self.catalogue.distance(route[j], route[j - 1]);
                    route_graph.graph.add_edge(Edge {
                        from: target.board,
                        to: origin.wait,
                        weight: self.settings.travel_minutes(backward_metres),
                        kind: EdgeKind::Ride { line: id, span_count },
                    });
                }
            }

            if line.is_roundtrip() {
                route_graph.graph.add_edge(Edge {
                    from: origin.board,
                    to: origin.wait,
                    weight: self.settings.travel_minutes(forward_metres),
                    kind: EdgeKind::Ride {
                        line: id,
                        span_count: forward_len - 1 - i,
                    },
                });
            }
        }

        debug!(
            line = line.name(),
            edges = route_graph.graph.edge_count() - before,
            "line added to route graph"
        );
    }
}
