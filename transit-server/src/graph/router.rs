//! All-pairs shortest paths with path reconstruction.
//!
//! Runs Dijkstra once from every vertex at construction and keeps, for
//! each (source, target) pair, the best weight and the last edge used.
//! Queries then walk predecessor edges back to the source without
//! touching the priority queue again.
//!
//! Cost is O(V·(V+E)·log V) time and O(V²) memory, which is fine for
//! networks of a few hundred stops but is the scaling limit of this
//! router.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use super::directed::{DirectedWeightedGraph, EdgeId, VertexId};

/// Best known way to reach a vertex from a fixed source.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RouteInternal {
    weight: f64,
    prev_edge: Option<EdgeId>,
}

/// A reconstructed shortest path.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    /// Total weight of the path.
    pub weight: f64,

    /// Edges from source to target, in travel order.
    pub edges: Vec<EdgeId>,
}

/// Min-heap entry for Dijkstra.
#[derive(Debug, Clone, Copy, PartialEq)]
struct QueueEntry {
    weight: f64,
    vertex: VertexId,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that BinaryHeap pops the lightest entry first
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Precomputed shortest paths over a [`DirectedWeightedGraph`].
///
/// The router keeps only vertex and edge indices; it does not borrow the
/// graph, so it can live alongside it in the same owner.
#[derive(Debug, Clone)]
pub struct Router {
    /// `routes[source][target]`
    routes: Vec<Vec<Option<RouteInternal>>>,
    /// Source vertex of every edge, for path reconstruction.
    edge_sources: Vec<VertexId>,
}

impl Router {
    /// Precompute shortest paths from every vertex.
    pub fn new<K>(graph: &DirectedWeightedGraph<K>) -> Self {
        let routes = (0..graph.vertex_count())
            .map(|source| shortest_paths_from(graph, source))
            .collect();
        let edge_sources = graph.edges().iter().map(|e| e.from).collect();

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "shortest paths precomputed"
        );

        Self {
            routes,
            edge_sources,
        }
    }

    /// Returns the number of vertices the router was built for.
    pub fn vertex_count(&self) -> usize {
        self.routes.len()
    }

    /// Shortest path from `from` to `to`, or `None` if `to` is unreachable.
    ///
    /// A vertex always reaches itself with an empty path of weight zero.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is outside the graph the router was built for.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo> {
        let from_source = &self.routes[from];
        let target = from_source[to]?;

        let mut edges = Vec::new();
        let mut prev_edge = target.prev_edge;
        while let Some(edge) = prev_edge {
            edges.push(edge);
            let previous_vertex = self.edge_sources[edge];
            prev_edge = from_source[previous_vertex].and_then(|route| route.prev_edge);
        }
        edges.reverse();

        Some(RouteInfo {
            weight: target.weight,
            edges,
        })
    }
}

/// Single-source Dijkstra.
fn shortest_paths_from<K>(
    graph: &DirectedWeightedGraph<K>,
    source: VertexId,
) -> Vec<Option<RouteInternal>> {
    let mut routes: Vec<Option<RouteInternal>> = vec![None; graph.vertex_count()];
    let mut queue = BinaryHeap::new();

    routes[source] = Some(RouteInternal {
        weight: 0.0,
        prev_edge: None,
    });
    queue.push(QueueEntry {
        weight: 0.0,
        vertex: source,
    });

    while let Some(QueueEntry { weight, vertex }) = queue.pop() {
        // Skip entries superseded by a lighter one
        if routes[vertex].is_some_and(|route| weight > route.weight) {
            continue;
        }

        for &edge_id in graph.incident_edges(vertex) {
            let edge = graph.edge(edge_id);
            let candidate = weight + edge.weight;
            let improves = match routes[edge.to] {
                Some(existing) => candidate < existing.weight,
                None => true,
            };
            if improves {
                routes[edge.to] = Some(RouteInternal {
                    weight: candidate,
                    prev_edge: Some(edge_id),
                });
                queue.push(QueueEntry {
                    weight: candidate,
                    vertex: edge.to,
                });
            }
        }
    }

    routes
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::graph::Edge;
    use proptest::prelude::*;

    fn random_graph() -> impl Strategy<Value = DirectedWeightedGraph<()>> {
        (2usize..8).prop_flat_map(|n| {
            proptest::collection::vec((0..n, 0..n, 0u32..50), 0..30).prop_map(move |edges| {
                let mut graph = DirectedWeightedGraph::new(n);
                for (from, to, weight) in edges {
                    graph.add_edge(Edge {
                        from,
                        to,
                        weight: f64::from(weight),
                        kind: (),
                    });
                }
                graph
            })
        })
    }

    proptest! {
        /// Reconstructed paths are connected, start and end where asked,
        /// and their edge weights add up to the reported total
        #[test]
        fn paths_are_consistent(graph in random_graph()) {
            let router = Router::new(&graph);
            let n = graph.vertex_count();
            for from in 0..n {
                for to in 0..n {
                    let Some(route) = router.build_route(from, to) else {
                        continue;
                    };
                    let mut at = from;
                    let mut total = 0.0;
                    for &edge_id in &route.edges {
                        let edge = graph.edge(edge_id);
                        prop_assert_eq!(edge.from, at);
                        at = edge.to;
                        total += edge.weight;
                    }
                    prop_assert_eq!(at, to);
                    prop_assert!((total - route.weight).abs() < 1e-9);
                }
            }
        }

        /// No single edge offers a shortcut over a computed distance
        #[test]
        fn triangle_inequality(graph in random_graph()) {
            let router = Router::new(&graph);
            for source in 0..graph.vertex_count() {
                for edge in graph.edges() {
                    if let Some(to_edge) = router.build_route(source, edge.from) {
                        let through = to_edge.weight + edge.weight;
                        let best = router.build_route(source, edge.to);
                        prop_assert!(best.is_some());
                        prop_assert!(best.unwrap().weight <= through + 1e-9);
                    }
                }
            }
        }
    }
}
