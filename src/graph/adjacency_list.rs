use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

/// Adjacency-list graph with an ordered-pair arc index.
///
/// Each adjacency entry carries the index of its logical edge record, so
/// both arc directions of an undirected edge resolve to the one id and
/// weight the input assigned.  Arc lookup by `(source, sink)` is O(1)
/// through the index.
///
/// The loader builds the graph once — [`AdjacencyGraph::new`] then one
/// [`AdjacencyGraph::add_edge`] per input tuple — and every algorithm
/// reads it through [`QueryableGraph`] afterwards.
#[derive(Clone)]
pub struct AdjacencyGraph {
    directed: bool,
    adjacency: Vec<Vec<(VertexId, usize)>>,
    edges: Vec<Edge>,
    arc_index: HashMap<(VertexId, VertexId), usize, RandomState>,
}

impl AdjacencyGraph {
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            directed,
            adjacency: vec![vec![]; vertex_count],
            edges: vec![],
            arc_index: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Inserts one logical edge.
    ///
    /// For undirected graphs this inserts both arc directions, sharing a
    /// single edge record.  An undirected self-loop therefore contributes
    /// two adjacency entries at its endpoint, i.e. degree 2.
    ///
    /// Endpoints must be in range and the ordered pair must not repeat;
    /// validating input is the loader's responsibility, not ours.
    pub fn add_edge(&mut self, id: EdgeId, source: VertexId, sink: VertexId, weight: Weight) {
        debug_assert!(source.to_raw() < self.adjacency.len());
        debug_assert!(sink.to_raw() < self.adjacency.len());
        debug_assert!(!self.arc_index.contains_key(&(source, sink)));
        let idx = self.edges.len();
        self.edges.push(Edge {
            id,
            source,
            sink,
            weight,
        });
        self.adjacency[source.to_raw()].push((sink, idx));
        self.arc_index.insert((source, sink), idx);
        if !self.directed {
            self.adjacency[sink.to_raw()].push((source, idx));
            self.arc_index.insert((sink, source), idx);
        }
    }
}

impl QueryableGraph for AdjacencyGraph {
    fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.adjacency.len()).map(VertexId::new))
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn out_arcs(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let source = *v;
        if source.to_raw() >= self.adjacency.len() {
            return Box::new(std::iter::empty());
        }
        let it = self.adjacency[source.to_raw()]
            .iter()
            .map(move |(sink, idx)| {
                let e = self.edges[*idx];
                Edge {
                    id: e.id,
                    source,
                    sink: *sink,
                    weight: e.weight,
                }
            });
        Box::new(it)
    }

    fn arc(&self, source: &VertexId, sink: &VertexId) -> Option<Edge> {
        let key = (*source, *sink);
        self.arc_index.get(&key).map(|idx| {
            let e = self.edges[*idx];
            Edge {
                id: e.id,
                source: key.0,
                sink: key.1,
                weight: e.weight,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vid(x: usize) -> VertexId {
        VertexId::new(x)
    }

    #[test]
    fn undirected_arcs_share_one_record() {
        let mut g = AdjacencyGraph::new(3, false);
        g.add_edge(EdgeId::new(7), vid(0), vid(1), 4);
        g.add_edge(EdgeId::new(3), vid(1), vid(2), 9);
        assert_eq!(g.edge_size(), 2);
        assert_eq!(g.edge_id(&vid(0), &vid(1)), Some(EdgeId::new(7)));
        assert_eq!(g.edge_id(&vid(1), &vid(0)), Some(EdgeId::new(7)));
        assert_eq!(g.weight(&vid(2), &vid(1)), Some(9));
        let back = g.arc(&vid(2), &vid(1)).unwrap();
        assert_eq!(back.source, vid(2));
        assert_eq!(back.sink, vid(1));
    }

    #[test]
    fn directed_reverse_arc_is_absent() {
        let mut g = AdjacencyGraph::new(2, true);
        g.add_edge(EdgeId::new(0), vid(0), vid(1), 1);
        assert!(g.arc(&vid(0), &vid(1)).is_some());
        assert!(g.arc(&vid(1), &vid(0)).is_none());
        assert_eq!(g.neighbors(&vid(1)).count(), 0);
    }

    #[test]
    fn adjacency_keeps_input_order() {
        let mut g = AdjacencyGraph::new(4, false);
        g.add_edge(EdgeId::new(0), vid(0), vid(3), 1);
        g.add_edge(EdgeId::new(1), vid(0), vid(1), 1);
        g.add_edge(EdgeId::new(2), vid(0), vid(2), 1);
        let order: Vec<_> = g.neighbors(&vid(0)).collect();
        assert_eq!(order, vec![vid(3), vid(1), vid(2)]);
    }

    #[test]
    fn undirected_self_loop_counts_twice() {
        let mut g = AdjacencyGraph::new(2, false);
        g.add_edge(EdgeId::new(0), vid(0), vid(0), 5);
        assert_eq!(g.out_arcs(&vid(0)).count(), 2);
        assert_eq!(g.edge_size(), 1);
    }

    #[test]
    fn transposed_reverses_directed_arcs() {
        let mut g = AdjacencyGraph::new(3, true);
        g.add_edge(EdgeId::new(0), vid(0), vid(1), 2);
        g.add_edge(EdgeId::new(1), vid(1), vid(2), 3);
        let t = g.transposed();
        assert!(t.arc(&vid(1), &vid(0)).is_some());
        assert!(t.arc(&vid(0), &vid(1)).is_none());
        assert_eq!(t.weight(&vid(2), &vid(1)), Some(3));
        assert_eq!(t.edge_size(), 2);
    }

    #[test]
    fn out_of_range_queries_come_back_empty() {
        let g = AdjacencyGraph::new(1, true);
        assert_eq!(g.out_arcs(&vid(9)).count(), 0);
        assert!(g.arc(&vid(0), &vid(9)).is_none());
        assert!(!g.contains_vertex(&vid(1)));
    }
}
