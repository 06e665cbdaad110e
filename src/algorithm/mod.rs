//! Graph algorithms, one query per trait, blanket-implemented for any
//! [`QueryableGraph`](crate::graph::QueryableGraph).
mod traversal;
pub use self::traversal::*;
mod union_find;
pub use self::union_find::*;
mod connectivity;
pub use self::connectivity::*;
mod bipartite;
pub use self::bipartite::*;
mod cycle;
pub use self::cycle::*;
mod eulerian;
pub use self::eulerian::*;
mod scc;
pub use self::scc::*;
mod lowlink;
pub use self::lowlink::*;
mod spanning_tree;
pub use self::spanning_tree::*;
mod mst;
pub use self::mst::*;
mod toposort;
pub use self::toposort::*;
mod shortest_path;
pub use self::shortest_path::*;
mod max_flow;
pub use self::max_flow::*;
mod reachability;
pub use self::reachability::*;
