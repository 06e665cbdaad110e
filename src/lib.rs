//! Classic graph-theory queries over a single directed or undirected graph.
//!
//! # The graph model
//!
//! A graph here is what a query driver hands us: `N` vertices identified by
//! dense integers in `[0, N)`, a directed/undirected flag, and a list of
//! edges each carrying an input-assigned id and an integer weight.
//! [`graph::AdjacencyGraph`] stores that as insertion-ordered adjacency
//! lists with an O(1) ordered-pair arc index; an undirected edge is two
//! arcs sharing one logical edge record.  The structure is built once and
//! read-only afterwards — no algorithm in this crate mutates it.
//!
//! # The algorithms
//!
//! Every analysis is an extension trait blanket-implemented for any
//! [`graph::QueryableGraph`], so they read as methods on the graph:
//!
//! ```rust
//! use graphquery::{algorithm::*, graph::*};
//!
//! let mut g = AdjacencyGraph::new(4, false);
//! g.add_edge(EdgeId::new(0), VertexId::new(0), VertexId::new(1), 1);
//! g.add_edge(EdgeId::new(1), VertexId::new(1), VertexId::new(2), 1);
//! g.add_edge(EdgeId::new(2), VertexId::new(2), VertexId::new(3), 1);
//!
//! assert!(g.is_connected());
//! assert!(!g.has_cycle());
//! assert!(!g.is_eulerian());
//! assert_eq!(g.euler_trail(), None);
//! ```
//!
//! Neighbor enumeration order is part of the contract: several outputs
//! (spanning-tree edges, visitation orders) are observable downstream and
//! must be reproducible, so adjacency order is insertion order and every
//! tie-break is documented at the algorithm that makes it.
//!
//! "No such structure" outcomes (no Euler trail, cyclic graph under
//! topological sort, unreachable destination) are ordinary `None`/empty
//! results, not errors.  Validating the input — vertex ids in range,
//! unique edge ids — is the loader's job before anything here runs.

pub mod algorithm;
pub mod graph;
