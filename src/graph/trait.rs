use crate::graph::*;

/// Read-only query surface of a graph; the seam every algorithm in this
/// crate is written against.
///
/// Implementations must uphold the load-time invariants: every vertex in
/// `[0, vertex_size())` has an adjacency row (possibly empty), and every
/// arc reachable through [`QueryableGraph::out_arcs`] resolves through
/// [`QueryableGraph::arc`] to the same id and weight.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn is_directed(&self) -> bool;
    /// Vertices in ascending order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Number of logical edges (an undirected edge counts once).
    fn edge_size(&self) -> usize;
    /// Logical edges in input order, each exactly once.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Arcs leaving `v` in adjacency (input) order, oriented so that
    /// `source == v`.  Empty, never an error, for a vertex without arcs.
    fn out_arcs(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
    /// The arc from `source` to `sink`, oriented that way, if present.
    fn arc(&self, source: &VertexId, sink: &VertexId) -> Option<Edge>;

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }

    /// Neighbor endpoints of [`QueryableGraph::out_arcs`].
    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.out_arcs(v).map(|e| e.sink))
    }

    fn weight(&self, source: &VertexId, sink: &VertexId) -> Option<Weight> {
        self.arc(source, sink).map(|e| e.weight)
    }

    fn edge_id(&self, source: &VertexId, sink: &VertexId) -> Option<EdgeId> {
        self.arc(source, sink).map(|e| e.id)
    }

    /// The arc-reversed graph.  A one-time O(V+E) rebuild; undirected
    /// graphs transpose to themselves.
    fn transposed(&self) -> AdjacencyGraph {
        let mut res = AdjacencyGraph::new(self.vertex_size(), self.is_directed());
        for e in self.iter_edges() {
            if self.is_directed() {
                res.add_edge(e.id, e.sink, e.source, e.weight);
            } else {
                res.add_edge(e.id, e.source, e.sink, e.weight);
            }
        }
        res
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
