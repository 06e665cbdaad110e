//! The graph model every query in this crate runs against.
//!
//! # Vertices, edges, arcs
//!
//! Vertices and edges are lightweight ID's.
//! Vertices are dense integers in `[0, N)` fixed at construction;
//! edge ids and weights come from the input and are carried verbatim.
//! Algorithm authors may feel free to copy and store these ID's.
//!
//! An *arc* is one stored direction of an edge.  A directed edge is one
//! arc; an undirected edge is two arcs sharing a single logical edge
//! record, so its id and weight cannot diverge between directions.
//!
//! # Construction and ordering
//!
//! [`AdjacencyGraph`] is populated once by the loader through
//! [`AdjacencyGraph::add_edge`] and is read-only afterwards.  Adjacency
//! order is edge input order; several query outputs observe it, so it is
//! part of the contract rather than an implementation detail.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod adjacency_list;
pub use self::adjacency_list::*;

#[cfg(test)]
pub use self::tests::*;
