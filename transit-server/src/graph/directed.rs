//! Directed weighted graph with labelled edges.

/// Index of a vertex.
pub type VertexId = usize;

/// Index of an edge, in insertion order.
pub type EdgeId = usize;

/// A directed edge carrying a non-negative weight and a label.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<K> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub kind: K,
}

/// A directed graph over a fixed number of vertices.
///
/// Edges are appended and never removed; `EdgeId`s are positions in
/// insertion order, and each vertex keeps its outgoing edges in that
/// same order.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedWeightedGraph<K> {
    edges: Vec<Edge<K>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<K> DirectedWeightedGraph<K> {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Append an edge and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `edge.from` is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge<K>) -> EdgeId {
        debug_assert!(edge.weight >= 0.0, "edge weights must be non-negative");
        debug_assert!(edge.to < self.incidence.len(), "edge target out of range");

        let id = self.edges.len();
        self.incidence[edge.from].push(id);
        self.edges.push(edge);
        id
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge with the given id.
    pub fn edge(&self, id: EdgeId) -> &Edge<K> {
        &self.edges[id]
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex]
    }
}
