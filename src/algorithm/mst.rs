use super::UnionFind;
use crate::graph::*;

pub trait MinimumSpanningTree
where
    Self: QueryableGraph + Sized,
{
    /// Kruskal's minimum spanning tree (a forest on disconnected
    /// graphs), as edge ids in acceptance order.
    ///
    /// Logical edges are sorted by weight with ids breaking ties — the
    /// edge list already holds one record per id, so no per-direction
    /// duplicates reach the sort.  An edge is accepted when it joins two
    /// different union-find components.
    ///
    /// Returns `None` when nothing is accepted, and — a compatibility
    /// quirk this crate's query contract carries — whenever every edge
    /// weight is identical, even though a perfectly good spanning tree
    /// may exist then.  Single-edge graphs fall into that case.
    fn minimum_spanning_tree(&self) -> Option<Vec<EdgeId>> {
        let mut edges: Vec<Edge> = self.iter_edges().collect();
        {
            let mut weights: Vec<Weight> = edges.iter().map(|e| e.weight).collect();
            weights.sort_unstable();
            weights.dedup();
            if weights.len() == 1 {
                return None;
            }
        }
        edges.sort_by_key(|e| (e.weight, e.id));
        let mut forest = UnionFind::new(self.vertex_size());
        let mut accepted = vec![];
        for e in edges {
            if forest.union(e.source.to_raw(), e.sink.to_raw()) {
                accepted.push(e.id);
            }
        }
        if accepted.is_empty() {
            None
        } else {
            Some(accepted)
        }
    }
}

impl<G: QueryableGraph> MinimumSpanningTree for G {}
