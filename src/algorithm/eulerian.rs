use super::Traversal;
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

pub trait Eulerian
where
    Self: QueryableGraph + Sized,
{
    /// Whether a closed trail through every edge exists.
    ///
    /// Directed: every vertex's in-degree equals its out-degree.
    /// Undirected: every degree is even and the graph is connected, so an
    /// isolated vertex disqualifies.  The empty graph is not Eulerian.
    fn is_eulerian(&self) -> bool {
        let n = self.vertex_size();
        if self.is_directed() {
            let mut in_degree = vec![0usize; n];
            let mut out_degree = vec![0usize; n];
            for e in self.iter_edges() {
                out_degree[e.source.to_raw()] += 1;
                in_degree[e.sink.to_raw()] += 1;
            }
            in_degree == out_degree
        } else {
            if n == 0 {
                return false;
            }
            let all_even = self
                .iter_vertices()
                .all(|v| self.out_arcs(&v).count() % 2 == 0);
            all_even && self.dfs(VertexId::new(0)).count() == n
        }
    }

    /// An Euler trail, or `None` when [`Eulerian::is_eulerian`] fails or
    /// when a degree-balanced directed graph splits into several closed
    /// trails that no single walk can cover.
    ///
    /// Hierholzer's method: an explicit vertex stack and one cursor per
    /// vertex over its outgoing arcs.  Directed arcs are consumed by
    /// cursor advance alone; undirected graphs additionally keep a
    /// used-edge set keyed by the unordered endpoint pair, so the second
    /// arc of a consumed edge is skipped when its endpoint's cursor
    /// reaches it.  The trail is the reverse of the pop order and starts
    /// at the first vertex with an outgoing arc.
    fn euler_trail(&self) -> Option<Vec<VertexId>> {
        if !self.is_eulerian() {
            return None;
        }
        let n = self.vertex_size();
        if n == 0 {
            return Some(vec![]);
        }
        let adjacency: Vec<Vec<VertexId>> = self
            .iter_vertices()
            .map(|v| self.neighbors(&v).collect())
            .collect();
        let start = self
            .iter_vertices()
            .find(|v| !adjacency[v.to_raw()].is_empty())
            .unwrap_or(VertexId::new(0));
        let mut cursor = vec![0usize; n];
        let mut used: HashSet<(VertexId, VertexId), RandomState> =
            HashSet::with_hasher(RandomState::new());
        let mut stack = vec![start];
        let mut trail = vec![];
        while let Some(v) = stack.last().copied() {
            let row = &adjacency[v.to_raw()];
            if cursor[v.to_raw()] < row.len() {
                let next = row[cursor[v.to_raw()]];
                cursor[v.to_raw()] += 1;
                if self.is_directed() {
                    stack.push(next);
                } else {
                    let key = (v.min(next), v.max(next));
                    if used.insert(key) {
                        stack.push(next);
                    }
                }
            } else {
                trail.push(v);
                stack.pop();
            }
        }
        trail.reverse();
        // a degree-balanced directed graph may split into several closed
        // trails; a walk from one start covers only one of them
        if trail.len() != self.edge_size() + 1 {
            return None;
        }
        Some(trail)
    }
}

impl<G: QueryableGraph> Eulerian for G {}
