use super::VertexId;

/// ID for edges, assigned by the input and carried verbatim.
///
/// Unlike vertex ids, edge ids are not necessarily contiguous.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// Integer edge weight.
///
/// Shortest-path and flow inputs are non-negative by the loader contract.
pub type Weight = i64;

/// One logical edge as given by the input.
///
/// For undirected graphs the same logical edge is reachable as two arcs,
/// `(source, sink)` and `(sink, source)`; both report this one id and
/// weight.  Oriented views (see [`QueryableGraph::out_arcs`]) put the
/// vertex being queried in `source`.
///
/// [`QueryableGraph::out_arcs`]: super::QueryableGraph::out_arcs
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: Weight,
}

impl EdgeId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}
