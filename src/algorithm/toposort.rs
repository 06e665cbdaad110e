use crate::graph::*;
use std::collections::VecDeque;

pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Kahn's topological order, or `None` when a cycle makes the order
    /// undefined.  `Some(vec![])` is the valid order of the empty graph,
    /// distinct from the cycle outcome.
    ///
    /// The frontier is a FIFO queue seeded with zero-in-degree vertices
    /// in ascending order, so the result is deterministic: among ready
    /// vertices, the one that became ready earliest leaves first.
    fn toposort(&self) -> Option<Vec<VertexId>> {
        let n = self.vertex_size();
        let mut in_degree = vec![0usize; n];
        for v in self.iter_vertices() {
            for arc in self.out_arcs(&v) {
                in_degree[arc.sink.to_raw()] += 1;
            }
        }
        let mut frontier: VecDeque<VertexId> = self
            .iter_vertices()
            .filter(|v| in_degree[v.to_raw()] == 0)
            .collect();
        let mut order = Vec::with_capacity(n);
        while let Some(v) = frontier.pop_front() {
            order.push(v);
            for arc in self.out_arcs(&v) {
                let d = &mut in_degree[arc.sink.to_raw()];
                *d -= 1;
                if *d == 0 {
                    frontier.push_back(arc.sink);
                }
            }
        }
        if order.len() == n {
            Some(order)
        } else {
            None
        }
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn vid(x: usize) -> VertexId {
        VertexId::new(x)
    }

    #[test]
    fn diamond_orders_deterministically() {
        let mut g = AdjacencyGraph::new(4, true);
        g.add_edge(EdgeId::new(0), vid(1), vid(3), 1);
        g.add_edge(EdgeId::new(1), vid(0), vid(1), 1);
        g.add_edge(EdgeId::new(2), vid(0), vid(2), 1);
        g.add_edge(EdgeId::new(3), vid(2), vid(3), 1);
        assert_eq!(
            g.toposort(),
            Some(vec![vid(0), vid(1), vid(2), vid(3)])
        );
    }

    #[test]
    fn cycle_has_no_order() {
        let mut g = AdjacencyGraph::new(3, true);
        g.add_edge(EdgeId::new(0), vid(0), vid(1), 1);
        g.add_edge(EdgeId::new(1), vid(1), vid(2), 1);
        g.add_edge(EdgeId::new(2), vid(2), vid(0), 1);
        assert_eq!(g.toposort(), None);
    }

    #[test]
    fn self_loop_counts_as_a_cycle() {
        let mut g = AdjacencyGraph::new(2, true);
        g.add_edge(EdgeId::new(0), vid(0), vid(1), 1);
        g.add_edge(EdgeId::new(1), vid(1), vid(1), 1);
        assert_eq!(g.toposort(), None);
    }

    #[test]
    fn empty_graph_has_the_empty_order() {
        let g = AdjacencyGraph::new(0, true);
        assert_eq!(g.toposort(), Some(vec![]));
    }

    #[test]
    fn edgeless_vertices_leave_in_ascending_order() {
        let g = AdjacencyGraph::new(4, true);
        assert_eq!(
            g.toposort(),
            Some(vec![vid(0), vid(1), vid(2), vid(3)])
        );
    }

    #[quickcheck]
    fn every_arc_points_forward(rg: RandomGraph) -> TestResult {
        if !rg.directed {
            return TestResult::discard();
        }
        let g = rg.build();
        let order = match g.toposort() {
            None => return TestResult::discard(),
            Some(o) => o,
        };
        let mut position = vec![0usize; rg.vertex_count];
        for (i, v) in order.iter().enumerate() {
            position[v.to_raw()] = i;
        }
        let forward = rg
            .edges
            .iter()
            .all(|(_, u, v, _)| position[u.to_raw()] < position[v.to_raw()]);
        TestResult::from_bool(forward)
    }

    #[quickcheck]
    fn fails_exactly_on_cyclic_graphs(rg: RandomGraph) -> TestResult {
        if !rg.directed {
            return TestResult::discard();
        }
        let g = rg.build();
        let mut pg = petgraph::Graph::<(), i64>::new();
        let nodes: Vec<_> = (0..rg.vertex_count).map(|_| pg.add_node(())).collect();
        for (_, u, v, w) in rg.edges.iter() {
            pg.add_edge(nodes[u.to_raw()], nodes[v.to_raw()], *w);
        }
        let cyclic = petgraph::algo::is_cyclic_directed(&pg);
        TestResult::from_bool(cyclic == g.toposort().is_none())
    }
}
