use crate::graph::*;

struct Frame {
    v: VertexId,
    parent: Option<VertexId>,
    next: usize,
}

pub trait CycleDetection
where
    Self: QueryableGraph + Sized,
{
    /// Cycle test with undirected semantics: a depth-first walk over
    /// every component that skips the arc back to the immediate parent
    /// and reports any other already-visited neighbor as a cycle.
    ///
    /// Frames live on an explicit stack, so deep graphs cannot exhaust
    /// the call stack.  Directed graphs would need an on-stack back-edge
    /// test instead; that variant is not part of this query battery.
    // TODO: directed variant via three-color DFS once the battery needs it
    fn has_cycle(&self) -> bool {
        let n = self.vertex_size();
        let adjacency: Vec<Vec<VertexId>> = self
            .iter_vertices()
            .map(|v| self.neighbors(&v).collect())
            .collect();
        let mut visited = vec![false; n];
        for root in self.iter_vertices() {
            if visited[root.to_raw()] {
                continue;
            }
            visited[root.to_raw()] = true;
            let mut frames = vec![Frame {
                v: root,
                parent: None,
                next: 0,
            }];
            loop {
                let (v, parent, next) = match frames.last_mut() {
                    None => break,
                    Some(f) => {
                        let probe = (f.v, f.parent, f.next);
                        f.next += 1;
                        probe
                    }
                };
                let row = &adjacency[v.to_raw()];
                if next >= row.len() {
                    frames.pop();
                    continue;
                }
                let w = row[next];
                if !visited[w.to_raw()] {
                    visited[w.to_raw()] = true;
                    frames.push(Frame {
                        v: w,
                        parent: Some(v),
                        next: 0,
                    });
                } else if Some(w) != parent {
                    return true;
                }
            }
        }
        false
    }
}

impl<G: QueryableGraph> CycleDetection for G {}
