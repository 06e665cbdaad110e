use crate::graph::*;

const UNSEEN: usize = usize::MAX;

struct Frame {
    v: VertexId,
    parent: Option<VertexId>,
    next: usize,
    children: usize,
}

struct CutStructure {
    articulation: Vec<VertexId>,
    bridges: Vec<(VertexId, VertexId)>,
}

/// One iterative low-link walk over every component, classifying edges
/// once and feeding both cut queries.
///
/// Each vertex gets `disc` (discovery time) and `low` (smallest discovery
/// time reachable from its subtree through at most one back edge) from a
/// per-call clock.  When a child's frame retires under `v`:
/// `low[v] = min(low[v], low[child])`; a non-root `v` is an articulation
/// point when `low[child] >= disc[v]`, the root when it has retired more
/// than one tree child, and the tree edge is a bridge when
/// `low[child] > disc[v]`.  Back edges to a visited non-parent neighbor
/// lower `low[v]` to that neighbor's discovery time.
fn cut_structure<G: QueryableGraph>(graph: &G) -> CutStructure {
    let n = graph.vertex_size();
    let adjacency: Vec<Vec<VertexId>> = graph
        .iter_vertices()
        .map(|v| graph.neighbors(&v).collect())
        .collect();
    let mut disc = vec![UNSEEN; n];
    let mut low = vec![UNSEEN; n];
    let mut clock = 0usize;
    let mut articulation = vec![false; n];
    let mut bridges = vec![];
    for root in graph.iter_vertices() {
        if disc[root.to_raw()] != UNSEEN {
            continue;
        }
        disc[root.to_raw()] = clock;
        low[root.to_raw()] = clock;
        clock += 1;
        let mut frames = vec![Frame {
            v: root,
            parent: None,
            next: 0,
            children: 0,
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
            if next < row.len() {
                let w = row[next];
                if disc[w.to_raw()] == UNSEEN {
                    disc[w.to_raw()] = clock;
                    low[w.to_raw()] = clock;
                    clock += 1;
                    frames.last_mut().unwrap().children += 1;
                    frames.push(Frame {
                        v: w,
                        parent: Some(v),
                        next: 0,
                        children: 0,
                    });
                } else if Some(w) != parent && disc[w.to_raw()] < low[v.to_raw()] {
                    low[v.to_raw()] = disc[w.to_raw()];
                }
                continue;
            }
            let done = frames.pop().unwrap();
            let p = match frames.last() {
                None => continue,
                Some(f) => f.v,
            };
            let child_low = low[done.v.to_raw()];
            if child_low < low[p.to_raw()] {
                low[p.to_raw()] = child_low;
            }
            if child_low > disc[p.to_raw()] {
                let pair = (p.min(done.v), p.max(done.v));
                bridges.push(pair);
            }
            let parent_frame = frames.last().unwrap();
            match parent_frame.parent {
                None => {
                    if parent_frame.children > 1 {
                        articulation[p.to_raw()] = true;
                    }
                }
                Some(_) => {
                    if child_low >= disc[p.to_raw()] {
                        articulation[p.to_raw()] = true;
                    }
                }
            }
        }
    }
    bridges.sort();
    CutStructure {
        articulation: (0..n)
            .filter(|i| articulation[*i])
            .map(VertexId::new)
            .collect(),
        bridges,
    }
}

pub trait CutPoints
where
    Self: QueryableGraph + Sized,
{
    /// Vertices whose removal splits their component, sorted ascending.
    ///
    /// Undirected semantics: parent arcs are skipped during edge
    /// classification, which only makes sense when every edge is walkable
    /// both ways.
    fn articulation_points(&self) -> Vec<VertexId> {
        cut_structure(self).articulation
    }

    /// Edges whose removal splits their component, each normalized to
    /// `(min, max)` and the list sorted lexicographically.
    fn bridges(&self) -> Vec<(VertexId, VertexId)> {
        cut_structure(self).bridges
    }
}

impl<G: QueryableGraph> CutPoints for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use crate::algorithm::Connectivity;

    fn vid(x: usize) -> VertexId {
        VertexId::new(x)
    }

    fn path(n: usize) -> AdjacencyGraph {
        let mut g = AdjacencyGraph::new(n, false);
        for i in 0..n - 1 {
            g.add_edge(EdgeId::new(i), vid(i), vid(i + 1), 1);
        }
        g
    }

    #[test]
    fn every_inner_path_vertex_cuts() {
        let g = path(5);
        assert_eq!(
            g.articulation_points(),
            vec![vid(1), vid(2), vid(3)]
        );
        assert_eq!(
            g.bridges(),
            vec![
                (vid(0), vid(1)),
                (vid(1), vid(2)),
                (vid(2), vid(3)),
                (vid(3), vid(4))
            ]
        );
    }

    #[test]
    fn cycles_have_no_cut_structure() {
        let mut g = AdjacencyGraph::new(4, false);
        for i in 0..4 {
            g.add_edge(EdgeId::new(i), vid(i), vid((i + 1) % 4), 1);
        }
        assert_eq!(g.articulation_points(), vec![]);
        assert_eq!(g.bridges(), vec![]);
    }

    #[test]
    fn two_triangles_sharing_a_vertex() {
        // triangles 0-1-2 and 2-3-4; vertex 2 is the hinge
        let mut g = AdjacencyGraph::new(5, false);
        for (i, (u, v)) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]
            .iter()
            .enumerate()
        {
            g.add_edge(EdgeId::new(i), vid(*u), vid(*v), 1);
        }
        assert_eq!(g.articulation_points(), vec![vid(2)]);
        assert_eq!(g.bridges(), vec![]);
    }

    #[test]
    fn root_with_two_subtrees_is_a_cut_point() {
        // star centered at 0
        let mut g = AdjacencyGraph::new(3, false);
        g.add_edge(EdgeId::new(0), vid(0), vid(1), 1);
        g.add_edge(EdgeId::new(1), vid(0), vid(2), 1);
        assert_eq!(g.articulation_points(), vec![vid(0)]);
    }

    fn rebuild_without_edge(
        rg: &RandomGraph,
        cut: (VertexId, VertexId),
    ) -> AdjacencyGraph {
        let mut g = AdjacencyGraph::new(rg.vertex_count, rg.directed);
        for (id, u, v, w) in rg.edges.iter() {
            if ((*u).min(*v), (*u).max(*v)) == cut {
                continue;
            }
            g.add_edge(*id, *u, *v, *w);
        }
        g
    }

    #[quickcheck]
    fn removing_a_bridge_splits_one_component(rg: RandomGraph) -> TestResult {
        if rg.directed {
            return TestResult::discard();
        }
        let g = rg.build();
        let before = g.connected_components().len();
        for bridge in g.bridges() {
            let after = rebuild_without_edge(&rg, bridge)
                .connected_components()
                .len();
            if after != before + 1 {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }

    #[quickcheck]
    fn cut_points_match_brute_force(rg: RandomGraph) -> TestResult {
        if rg.directed {
            return TestResult::discard();
        }
        let g = rg.build();
        let reported = g.articulation_points();
        let before = g.connected_components().len();
        // removing a vertex must grow the component count (the removed
        // vertex itself no longer counting) exactly for reported points
        for v in g.iter_vertices() {
            let mut shrunk = AdjacencyGraph::new(rg.vertex_count, false);
            for (id, a, b, w) in rg.edges.iter() {
                if *a == v || *b == v {
                    continue;
                }
                shrunk.add_edge(*id, *a, *b, *w);
            }
            let after = shrunk.connected_components().len() - 1;
            let cuts = after > before;
            if cuts != reported.contains(&v) {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }
}
