//! bfs-core: breadth-first search over any graph.
//!
//! Consumes a read-only [`Graph`] capability (enumerate vertices, enumerate
//! neighbors of a vertex) and computes shortest-path distances in edge count
//! plus a predecessor tree rooted at the start vertex. All per-run marking
//! lives in the returned [`BfsTree`], never on the graph, so concurrent
//! traversals over one shared graph are independent.
//!
//! [`AdjacencyGraph`] is a ready-made in-memory graph; with the `petgraph`
//! feature, `petgraph::Graph` can be traversed directly.

mod error;
mod graph;
#[cfg(feature = "petgraph")]
mod interop;
mod traversal;

pub use error::{BfsError, Result};
pub use graph::{AdjacencyGraph, Graph, GraphView, Neighbors, TraversalDirection};
pub use traversal::{
    shortest_path, traverse, traverse_with, BfsTree, Distance, TraversalOptions, VisitState,
};
