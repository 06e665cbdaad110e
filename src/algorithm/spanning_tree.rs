use crate::graph::*;
use std::collections::VecDeque;

pub trait SpanningTree
where
    Self: QueryableGraph + Sized,
{
    /// Edge ids of the depth-first tree rooted at vertex 0.
    ///
    /// Neighbors are taken in ascending numeric order rather than
    /// adjacency order, so the tree does not depend on edge input order;
    /// the ids come back sorted ascending.  Empty when the graph has no
    /// vertices or the root reaches nothing.
    fn dfs_tree_edges(&self) -> Vec<EdgeId> {
        let n = self.vertex_size();
        if n == 0 {
            return vec![];
        }
        let mut visited = vec![false; n];
        let mut stack = vec![VertexId::new(0)];
        visited[0] = true;
        let mut ids = vec![];
        while let Some(v) = stack.pop() {
            let mut row: Vec<VertexId> = self.neighbors(&v).collect();
            row.sort();
            for w in row {
                if !visited[w.to_raw()] {
                    visited[w.to_raw()] = true;
                    ids.push(self.arc(&v, &w).unwrap().id);
                    stack.push(w);
                }
            }
        }
        ids.sort();
        ids
    }

    /// Edge ids of the breadth-first tree rooted at vertex 0, in
    /// discovery order.
    ///
    /// Unlike the depth-first variant this keeps natural adjacency
    /// order, so both the tree and the id sequence reproduce the input
    /// order of edges.
    fn bfs_tree_edges(&self) -> Vec<EdgeId> {
        let n = self.vertex_size();
        if n == 0 {
            return vec![];
        }
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        queue.push_back(VertexId::new(0));
        visited[0] = true;
        let mut ids = vec![];
        while let Some(v) = queue.pop_front() {
            for arc in self.out_arcs(&v) {
                let w = arc.sink;
                if !visited[w.to_raw()] {
                    visited[w.to_raw()] = true;
                    ids.push(arc.id);
                    queue.push_back(w);
                }
            }
        }
        ids
    }
}

impl<G: QueryableGraph> SpanningTree for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn vid(x: usize) -> VertexId {
        VertexId::new(x)
    }

    fn diamond() -> AdjacencyGraph {
        // 0-1, 0-2, 1-3, 2-3
        let mut g = AdjacencyGraph::new(4, false);
        g.add_edge(EdgeId::new(0), vid(0), vid(1), 1);
        g.add_edge(EdgeId::new(1), vid(0), vid(2), 1);
        g.add_edge(EdgeId::new(2), vid(1), vid(3), 1);
        g.add_edge(EdgeId::new(3), vid(2), vid(3), 1);
        g
    }

    #[test]
    fn bfs_tree_reaches_the_far_corner_through_the_first_branch() {
        // the frontier pops 1 before 2, so 3 is discovered over edge 2
        assert_eq!(
            diamond().bfs_tree_edges(),
            vec![EdgeId::new(0), EdgeId::new(1), EdgeId::new(2)]
        );
    }

    #[test]
    fn dfs_tree_reaches_the_far_corner_through_the_last_branch() {
        // the stack pops 2 before 1, so 3 is discovered over edge 3
        assert_eq!(
            diamond().dfs_tree_edges(),
            vec![EdgeId::new(0), EdgeId::new(1), EdgeId::new(3)]
        );
    }

    #[test]
    fn single_vertex_trees_are_empty() {
        let g = AdjacencyGraph::new(1, false);
        assert_eq!(g.dfs_tree_edges(), vec![]);
        assert_eq!(g.bfs_tree_edges(), vec![]);
    }

    #[test]
    fn unreachable_component_stays_out() {
        let mut g = AdjacencyGraph::new(4, false);
        g.add_edge(EdgeId::new(0), vid(0), vid(1), 1);
        g.add_edge(EdgeId::new(1), vid(2), vid(3), 1);
        assert_eq!(g.dfs_tree_edges(), vec![EdgeId::new(0)]);
        assert_eq!(g.bfs_tree_edges(), vec![EdgeId::new(0)]);
    }

    #[quickcheck]
    fn both_trees_span_the_root_component(rg: RandomGraph) -> TestResult {
        use crate::algorithm::Traversal;
        if rg.directed {
            return TestResult::discard();
        }
        let g = rg.build();
        let reachable = g.bfs(VertexId::new(0)).count();
        let dfs = g.dfs_tree_edges();
        let bfs = g.bfs_tree_edges();
        // a tree over k vertices holds k - 1 edges
        TestResult::from_bool(
            dfs.len() == reachable - 1 && bfs.len() == reachable - 1,
        )
    }

    #[quickcheck]
    fn dfs_tree_ids_come_back_sorted(rg: RandomGraph) {
        let ids = rg.build().dfs_tree_edges();
        assert!(ids.windows(2).all(|p| p[0] < p[1]));
    }
}
