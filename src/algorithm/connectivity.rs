use super::Traversal;
use crate::graph::*;
use std::collections::VecDeque;

pub trait Connectivity
where
    Self: QueryableGraph + Sized,
{
    /// Whether every vertex is reachable in the sense that fits the
    /// graph's kind: plain connectivity for undirected graphs, strong
    /// connectivity for directed ones (a cover-all sweep from vertex 0 on
    /// the graph and on its transpose).
    ///
    /// The empty graph is not connected.
    fn is_connected(&self) -> bool {
        let n = self.vertex_size();
        if n == 0 {
            return false;
        }
        let start = VertexId::new(0);
        if self.bfs(start).count() != n {
            return false;
        }
        if !self.is_directed() {
            return true;
        }
        self.transposed().bfs(start).count() == n
    }

    /// Components of the reachability relation over stored arcs.
    ///
    /// Sweeps roots in ascending order; each component comes back sorted
    /// ascending and the component list is ordered lexicographically.
    /// For undirected graphs these are the connected components; for
    /// directed graphs the sweep follows arc direction only, so the
    /// result is a forest of reachability sweeps, not weak components.
    fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let n = self.vertex_size();
        let mut visited = vec![false; n];
        let mut components = vec![];
        for root in self.iter_vertices() {
            if visited[root.to_raw()] {
                continue;
            }
            visited[root.to_raw()] = true;
            let mut component = vec![];
            let mut queue = VecDeque::new();
            queue.push_back(root);
            while let Some(v) = queue.pop_front() {
                component.push(v);
                for w in self.neighbors(&v) {
                    if !visited[w.to_raw()] {
                        visited[w.to_raw()] = true;
                        queue.push_back(w);
                    }
                }
            }
            component.sort();
            components.push(component);
        }
        components.sort();
        components
    }
}

impl<G: QueryableGraph> Connectivity for G {}
