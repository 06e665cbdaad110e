use crate::graph::*;
use std::collections::VecDeque;

pub trait Bipartiteness
where
    Self: QueryableGraph + Sized,
{
    /// Two-colorability, checked by a breadth-first coloring sweep per
    /// uncolored vertex with an immediate stop on the first conflict.
    ///
    /// Coloring constraints follow the stored arcs.  Undirected graphs
    /// carry both arc directions, so the constraint is symmetric; for
    /// directed graphs only `source -> sink` pairs constrain the
    /// coloring.  A directed odd cycle is therefore rejected while a
    /// directed even cycle or path passes.
    fn is_bipartite(&self) -> bool {
        let n = self.vertex_size();
        let mut color: Vec<Option<bool>> = vec![None; n];
        for root in self.iter_vertices() {
            if color[root.to_raw()].is_some() {
                continue;
            }
            color[root.to_raw()] = Some(false);
            let mut queue = VecDeque::new();
            queue.push_back(root);
            while let Some(v) = queue.pop_front() {
                let c = color[v.to_raw()].unwrap();
                for w in self.neighbors(&v) {
                    match color[w.to_raw()] {
                        None => {
                            color[w.to_raw()] = Some(!c);
                            queue.push_back(w);
                        }
                        Some(cw) => {
                            if cw == c {
                                return false;
                            }
                        }
                    }
                }
            }
        }
        true
    }
}

impl<G: QueryableGraph> Bipartiteness for G {}
