use super::Traversal;
use crate::graph::*;

pub trait TransitiveClosure
where
    Self: QueryableGraph + Sized,
{
    /// Every vertex reachable from `source` along stored arcs, sorted
    /// ascending.  `source` itself is always included when it exists.
    ///
    /// The battery asks this of directed graphs; on undirected graphs
    /// the paired arcs make it the component of `source`.
    fn transitive_closure(&self, source: VertexId) -> Vec<VertexId> {
        let mut reachable: Vec<VertexId> = self.bfs(source).collect();
        reachable.sort();
        reachable
    }
}

impl<G: QueryableGraph> TransitiveClosure for G {}
