use super::Traversal;
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// A shortest path: its total weight and its vertices from source to
/// sink inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedPath {
    pub distance: Weight,
    pub path: Vec<VertexId>,
}

pub trait ShortestPath
where
    Self: QueryableGraph + Sized,
{
    /// Dijkstra's shortest path from `source` to `sink`, for the
    /// non-negative weights this system is defined over.
    ///
    /// `source == sink` is the trivial single-vertex path of distance 0.
    /// A reachability sweep runs first and answers `None` before any
    /// relaxation when `sink` cannot be reached at all.
    ///
    /// The frontier is a keyed min-queue on `(distance, vertex)`, so
    /// among equally distant vertices the smaller id settles first and
    /// the reported path is reproducible.
    fn shortest_path(&self, source: VertexId, sink: VertexId) -> Option<WeightedPath> {
        if !self.contains_vertex(&source) || !self.contains_vertex(&sink) {
            return None;
        }
        if source == sink {
            return Some(WeightedPath {
                distance: 0,
                path: vec![source],
            });
        }
        if !self.bfs(source).any(|v| v == sink) {
            return None;
        }
        let n = self.vertex_size();
        let mut dist: Vec<Option<Weight>> = vec![None; n];
        let mut pred: Vec<Option<VertexId>> = vec![None; n];
        let mut frontier: KeyedPriorityQueue<VertexId, Reverse<(Weight, VertexId)>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
        dist[source.to_raw()] = Some(0);
        frontier.push(source, Reverse((0, source)));
        while let Some((v, Reverse((d, _)))) = frontier.pop() {
            if v == sink {
                break;
            }
            for arc in self.out_arcs(&v) {
                let candidate = d + arc.weight;
                let w = arc.sink;
                let improves = match dist[w.to_raw()] {
                    None => true,
                    Some(cur) => candidate < cur,
                };
                if improves {
                    dist[w.to_raw()] = Some(candidate);
                    pred[w.to_raw()] = Some(v);
                    // push also reprioritizes a queued vertex
                    frontier.push(w, Reverse((candidate, w)));
                }
            }
        }
        let distance = dist[sink.to_raw()]?;
        let mut path = vec![sink];
        loop {
            match pred[path.last().unwrap().to_raw()] {
                None => break,
                Some(p) => path.push(p),
            }
        }
        path.reverse();
        debug_assert_eq!(path[0], source);
        Some(WeightedPath { distance, path })
    }
}

impl<G: QueryableGraph> ShortestPath for G {}
