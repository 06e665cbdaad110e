use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, VecDeque};

pub trait MaximumFlow
where
    Self: QueryableGraph + Sized,
{
    /// Maximum flow from `source` to `sink` by repeated breadth-first
    /// augmentation (Ford-Fulkerson with shortest augmenting paths).
    ///
    /// Capacities start from the arc weights in a residual map private
    /// to this call; the underlying graph is untouched.  Every
    /// augmentation subtracts the path bottleneck from its forward arcs
    /// and adds it to the reverse arcs, which exist in the residual
    /// graph at capacity 0 even when the input has no such arc — that is
    /// what lets a later path cancel flow already routed.  The loop
    /// terminates exactly when no positive-capacity path remains.
    ///
    /// The battery runs this on directed graphs only.
    fn maximum_flow(&self, source: VertexId, sink: VertexId) -> Weight {
        let n = self.vertex_size();
        if !self.contains_vertex(&source) || !self.contains_vertex(&sink) || source == sink {
            return 0;
        }
        let mut capacity: HashMap<(VertexId, VertexId), Weight, RandomState> =
            HashMap::with_hasher(RandomState::new());
        let mut residual_adj: Vec<Vec<VertexId>> = vec![vec![]; n];
        for v in self.iter_vertices() {
            for arc in self.out_arcs(&v) {
                capacity.insert((arc.source, arc.sink), arc.weight);
                residual_adj[arc.source.to_raw()].push(arc.sink);
            }
        }
        // reverse arcs enter the residual graph at capacity 0
        for e in self.iter_edges() {
            if !capacity.contains_key(&(e.sink, e.source)) {
                capacity.insert((e.sink, e.source), 0);
                residual_adj[e.sink.to_raw()].push(e.source);
            }
        }

        let mut total = 0;
        loop {
            let mut parent: Vec<Option<VertexId>> = vec![None; n];
            let mut visited = vec![false; n];
            visited[source.to_raw()] = true;
            let mut queue = VecDeque::new();
            queue.push_back(source);
            while let Some(u) = queue.pop_front() {
                if u == sink {
                    break;
                }
                for w in residual_adj[u.to_raw()].iter().copied() {
                    if !visited[w.to_raw()] && capacity[&(u, w)] > 0 {
                        visited[w.to_raw()] = true;
                        parent[w.to_raw()] = Some(u);
                        queue.push_back(w);
                    }
                }
            }
            if !visited[sink.to_raw()] {
                break;
            }

            let mut bottleneck = Weight::MAX;
            let mut v = sink;
            while v != source {
                let u = parent[v.to_raw()].unwrap();
                bottleneck = bottleneck.min(capacity[&(u, v)]);
                v = u;
            }
            let mut v = sink;
            while v != source {
                let u = parent[v.to_raw()].unwrap();
                *capacity.get_mut(&(u, v)).unwrap() -= bottleneck;
                *capacity.get_mut(&(v, u)).unwrap() += bottleneck;
                v = u;
            }
            total += bottleneck;
        }
        total
    }
}

impl<G: QueryableGraph> MaximumFlow for G {}
