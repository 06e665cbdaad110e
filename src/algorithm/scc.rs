use crate::graph::*;

pub trait StronglyConnected
where
    Self: QueryableGraph + Sized,
{
    /// Strongly connected components by Kosaraju's two passes: a
    /// finish-order depth-first sweep, then collection sweeps over the
    /// transposed graph in reverse finish order.
    ///
    /// Both sweeps run on explicit stacks.  Each component comes back
    /// sorted ascending and the component list is ordered
    /// lexicographically, like the connected-component listing.
    ///
    /// Meaningful for directed graphs; on an undirected graph the paired
    /// arcs make this the plain component decomposition.
    fn strongly_connected_components(&self) -> Vec<Vec<VertexId>> {
        let n = self.vertex_size();
        let adjacency: Vec<Vec<VertexId>> = self
            .iter_vertices()
            .map(|v| self.neighbors(&v).collect())
            .collect();

        // pass one: vertices in finish order
        let mut visited = vec![false; n];
        let mut finish = Vec::with_capacity(n);
        for root in self.iter_vertices() {
            if visited[root.to_raw()] {
                continue;
            }
            visited[root.to_raw()] = true;
            let mut frames: Vec<(VertexId, usize)> = vec![(root, 0)];
            loop {
                let (v, next) = match frames.last_mut() {
                    None => break,
                    Some(f) => {
                        let probe = (f.0, f.1);
                        f.1 += 1;
                        probe
                    }
                };
                let row = &adjacency[v.to_raw()];
                if next >= row.len() {
                    finish.push(v);
                    frames.pop();
                    continue;
                }
                let w = row[next];
                if !visited[w.to_raw()] {
                    visited[w.to_raw()] = true;
                    frames.push((w, 0));
                }
            }
        }

        // pass two: collect one component per unvisited reverse-order root
        let transposed = self.transposed();
        let mut visited = vec![false; n];
        let mut components = vec![];
        for root in finish.iter().rev().copied() {
            if visited[root.to_raw()] {
                continue;
            }
            visited[root.to_raw()] = true;
            let mut component = vec![];
            let mut stack = vec![root];
            while let Some(v) = stack.pop() {
                component.push(v);
                for w in transposed.neighbors(&v) {
                    if !visited[w.to_raw()] {
                        visited[w.to_raw()] = true;
                        stack.push(w);
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

impl<G: QueryableGraph> StronglyConnected for G {}
