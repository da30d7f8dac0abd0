use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::slice;

/// Read-only capability consumed by the traversal: enumerate every vertex,
/// and enumerate the neighbors of one vertex in adjacency order.
///
/// Iterators are associated types so implementations hand out plain slice
/// or index iterators without boxing.
pub trait Graph {
    /// Opaque vertex identity.
    type Vertex: Clone + Eq + Hash + Debug;

    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    type Neighbors<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// All vertices. Must be finite and restartable.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Neighbors of `vertex` in adjacency order. Unknown vertices have none.
    fn adjacent(&self, vertex: &Self::Vertex) -> Self::Neighbors<'_>;
}

/// Which stored edges a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalDirection {
    /// Follow edges from source to target.
    #[default]
    Outgoing,
    /// Follow edges from target back to source.
    Incoming,
    /// Follow edges either way (undirected reading).
    Both,
}

impl TraversalDirection {
    fn flags(self) -> (bool, bool) {
        match self {
            TraversalDirection::Outgoing => (true, false),
            TraversalDirection::Incoming => (false, true),
            TraversalDirection::Both => (true, true),
        }
    }
}

/// In-memory directed graph: vertex arena + identity index + adjacency lists.
///
/// Edges are stored twice: `outgoing[a]` holds the slot of every edge target
/// leaving `a`, `incoming[b]` holds the slot of every source entering `b`.
/// Parallel edges and self-loops are kept as inserted.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<V> AdjacencyGraph<V>
where
    V: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            edge_count: 0,
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            outgoing: Vec::with_capacity(vertex_count),
            incoming: Vec::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Register a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.slot_of(vertex);
        true
    }

    /// Add a directed edge, registering either endpoint if missing.
    pub fn add_edge(&mut self, from: V, to: V) {
        let from = self.slot_of(from);
        let to = self.slot_of(to);
        self.outgoing[from].push(to);
        self.incoming[to].push(from);
        self.edge_count += 1;
    }

    /// Bulk load from an iterator of `(from, to)` pairs.
    pub fn load_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of `vertex` along the given direction. `Both` yields the
    /// outgoing neighbors first, then the incoming ones.
    pub fn neighbors(&self, vertex: &V, direction: TraversalDirection) -> Neighbors<'_, V> {
        let (use_out, use_inc) = direction.flags();
        let (mut out, mut inc): (&[usize], &[usize]) = (&[], &[]);
        if let Some(&slot) = self.index.get(vertex) {
            if use_out {
                out = &self.outgoing[slot];
            }
            if use_inc {
                inc = &self.incoming[slot];
            }
        }
        Neighbors {
            vertices: &self.vertices,
            slots: out.iter().chain(inc.iter()),
        }
    }

    /// Borrow this graph as a [`Graph`] that follows `direction`.
    pub fn view(&self, direction: TraversalDirection) -> GraphView<'_, V> {
        GraphView {
            graph: self,
            direction,
        }
    }

    fn slot_of(&mut self, vertex: V) -> usize {
        if let Some(&slot) = self.index.get(&vertex) {
            return slot;
        }
        let slot = self.vertices.len();
        self.vertices.push(vertex.clone());
        self.index.insert(vertex, slot);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        slot
    }
}

impl<V> Default for AdjacencyGraph<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph for AdjacencyGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Vertex = V;
    type Vertices<'a> = std::iter::Cloned<slice::Iter<'a, V>> where Self: 'a;
    type Neighbors<'a> = Neighbors<'a, V> where Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.vertices.iter().cloned()
    }

    fn adjacent(&self, vertex: &V) -> Self::Neighbors<'_> {
        self.neighbors(vertex, TraversalDirection::Outgoing)
    }
}

/// Directional view over an [`AdjacencyGraph`].
#[derive(Debug, Clone, Copy)]
pub struct GraphView<'g, V> {
    graph: &'g AdjacencyGraph<V>,
    direction: TraversalDirection,
}

impl<V> GraphView<'_, V> {
    pub fn direction(&self) -> TraversalDirection {
        self.direction
    }
}

impl<'g, V> Graph for GraphView<'g, V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Vertex = V;
    type Vertices<'a> = std::iter::Cloned<slice::Iter<'g, V>> where Self: 'a;
    type Neighbors<'a> = Neighbors<'g, V> where Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.graph.vertices.iter().cloned()
    }

    fn adjacent(&self, vertex: &V) -> Self::Neighbors<'_> {
        self.graph.neighbors(vertex, self.direction)
    }
}

/// Neighbor iterator over an [`AdjacencyGraph`], resolving slots to identities.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, V> {
    vertices: &'a [V],
    slots: std::iter::Chain<slice::Iter<'a, usize>, slice::Iter<'a, usize>>,
}

impl<V: Clone> Iterator for Neighbors<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.slots.next().map(|&slot| self.vertices[slot].clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> AdjacencyGraph<&'static str> {
        let mut g = AdjacencyGraph::new();
        g.load_edges(vec![("a", "b"), ("b", "c"), ("c", "a")]);
        g
    }

    #[test]
    fn test_vertices_in_insertion_order() {
        let g = triangle();
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g = AdjacencyGraph::new();
        assert!(g.add_vertex(7u64));
        assert!(!g.add_vertex(7u64));
        assert_eq!(g.vertex_count(), 1);
        assert!(g.contains(&7));
        assert!(!g.contains(&8));
    }

    #[test]
    fn test_adjacent_follows_outgoing() {
        let g = triangle();
        assert_eq!(g.adjacent(&"a").collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(
            g.neighbors(&"a", TraversalDirection::Incoming).collect::<Vec<_>>(),
            vec!["c"]
        );
    }

    #[test]
    fn test_both_lists_outgoing_first() {
        let g = triangle();
        let both: Vec<_> = g.view(TraversalDirection::Both).adjacent(&"b").collect();
        assert_eq!(both, vec!["c", "a"]);
    }

    #[test]
    fn test_adjacency_order_preserved() {
        let mut g = AdjacencyGraph::new();
        g.load_edges(vec![(0u32, 3), (0, 1), (0, 2)]);
        assert_eq!(g.adjacent(&0).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_unknown_vertex_has_no_neighbors() {
        let g = triangle();
        assert_eq!(g.adjacent(&"zzz").count(), 0);
        assert_eq!(g.view(TraversalDirection::Both).adjacent(&"zzz").count(), 0);
    }

    #[test]
    fn test_parallel_edges_and_self_loops_kept() {
        let mut g = AdjacencyGraph::new();
        g.load_edges(vec![(1u8, 2), (1, 2), (1, 1)]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.adjacent(&1).collect::<Vec<_>>(), vec![2, 2, 1]);
        assert_eq!(
            g.neighbors(&1, TraversalDirection::Incoming).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn test_view_reports_direction() {
        let g = triangle();
        assert_eq!(
            g.view(TraversalDirection::Incoming).direction(),
            TraversalDirection::Incoming
        );
    }
}
