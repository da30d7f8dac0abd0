//! [`Graph`] for `petgraph::Graph`, so existing petgraph structures can be
//! traversed without copying into an [`AdjacencyGraph`](crate::AdjacencyGraph).

use petgraph::graph::{Graph as PetGraph, IndexType, Neighbors, NodeIndex, NodeIndices};
use petgraph::EdgeType;

use crate::graph::Graph;

/// Vertices are node indices. Adjacency is petgraph's `neighbors`, which
/// follows outgoing edges on directed graphs and all edges on undirected
/// ones, most recently added first.
impl<N, E, Ty, Ix> Graph for PetGraph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type Vertex = NodeIndex<Ix>;
    type Vertices<'a> = NodeIndices<Ix> where Self: 'a;
    type Neighbors<'a> = Neighbors<'a, E, Ix> where Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.node_indices()
    }

    fn adjacent(&self, vertex: &NodeIndex<Ix>) -> Self::Neighbors<'_> {
        self.neighbors(*vertex)
    }
}
