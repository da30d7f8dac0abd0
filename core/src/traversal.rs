use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use tracing::{debug, debug_span, field, trace};

use crate::error::{BfsError, Result};
use crate::graph::Graph;

/// Per-vertex marking during a traversal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// Not discovered yet.
    Unvisited,
    /// Discovered and waiting in the queue.
    Frontier,
    /// Adjacency fully processed.
    Settled,
}

/// Shortest-path distance from the start vertex, in edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    Reached(u32),
    Unreachable,
}

impl Distance {
    /// Hop count, or None when unreachable.
    pub fn hops(self) -> Option<u32> {
        match self {
            Distance::Reached(hops) => Some(hops),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reached(self) -> bool {
        matches!(self, Distance::Reached(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reached(hops) => write!(f, "{hops}"),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Per-call traversal parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Vertices at this distance are settled without being expanded.
    /// None traverses the whole reachable set.
    pub max_depth: Option<u32>,
}

impl TraversalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    state: VisitState,
    distance: Distance,
    predecessor: Option<usize>,
}

impl Slot {
    const UNVISITED: Slot = Slot {
        state: VisitState::Unvisited,
        distance: Distance::Unreachable,
        predecessor: None,
    };
}

/// Outcome of a breadth-first traversal: distance and predecessor for every
/// vertex the graph enumerated.
///
/// All metadata lives here, indexed by arena slot; the graph is never
/// written to and is not borrowed once the traversal returns.
#[derive(Debug, Clone)]
pub struct BfsTree<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    slots: Vec<Slot>,
    order: Vec<usize>,
    start: usize,
}

impl<V> BfsTree<V>
where
    V: Clone + Eq + Hash,
{
    pub fn start(&self) -> &V {
        &self.vertices[self.start]
    }

    /// Number of vertices enumerated from the graph.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn reached_count(&self) -> usize {
        self.order.len()
    }

    /// None if `vertex` is not a vertex of the traversed graph.
    pub fn distance(&self, vertex: &V) -> Option<Distance> {
        self.slot(vertex).map(|slot| slot.distance)
    }

    /// Predecessor on the shortest-path tree. None for the start vertex,
    /// unreached vertices and unknown vertices.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.slot(vertex)
            .and_then(|slot| slot.predecessor)
            .map(|p| &self.vertices[p])
    }

    pub fn visit_state(&self, vertex: &V) -> Option<VisitState> {
        self.slot(vertex).map(|slot| slot.state)
    }

    pub fn is_reached(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some_and(Distance::is_reached)
    }

    /// Shortest path from the start vertex to `vertex`, both endpoints included.
    pub fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        let &slot = self.index.get(vertex)?;
        if !self.slots[slot].distance.is_reached() {
            return None;
        }
        Some(reconstruct_path(&self.vertices, &self.slots, slot))
    }

    /// Reached vertices in discovery order.
    pub fn reached(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter().map(|&slot| &self.vertices[slot])
    }

    /// `(vertex, distance, predecessor)` for every enumerated vertex, in
    /// enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Distance, Option<&V>)> + '_ {
        self.vertices.iter().zip(&self.slots).map(|(vertex, slot)| {
            (
                vertex,
                slot.distance,
                slot.predecessor.map(|p| &self.vertices[p]),
            )
        })
    }

    /// True when every vertex of the graph is reachable from the start.
    pub fn spans_graph(&self) -> bool {
        self.order.len() == self.vertices.len()
    }

    /// Greatest distance among reached vertices.
    pub fn eccentricity(&self) -> u32 {
        // Discovery order is non-decreasing in distance.
        self.order
            .last()
            .and_then(|&slot| self.slots[slot].distance.hops())
            .unwrap_or(0)
    }

    pub fn into_map(self) -> HashMap<V, (Distance, Option<V>)> {
        let BfsTree {
            vertices, slots, ..
        } = self;
        vertices
            .iter()
            .zip(&slots)
            .map(|(vertex, slot)| {
                let predecessor = slot.predecessor.map(|p| vertices[p].clone());
                (vertex.clone(), (slot.distance, predecessor))
            })
            .collect()
    }

    fn slot(&self, vertex: &V) -> Option<&Slot> {
        self.index.get(vertex).map(|&slot| &self.slots[slot])
    }
}

/// Traversal-local state: vertex arena, identity index, markings, FIFO queue.
struct Search<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    slots: Vec<Slot>,
    order: Vec<usize>,
    queue: VecDeque<(usize, u32)>,
}

impl<V> Search<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Enumerate the graph once and mark every vertex unvisited.
    fn init<G>(graph: &G) -> Self
    where
        G: Graph<Vertex = V> + ?Sized,
    {
        let mut vertices = Vec::new();
        let mut index = HashMap::new();
        for vertex in graph.vertices() {
            if index.contains_key(&vertex) {
                continue;
            }
            index.insert(vertex.clone(), vertices.len());
            vertices.push(vertex);
        }
        let slots = vec![Slot::UNVISITED; vertices.len()];
        Self {
            vertices,
            index,
            slots,
            order: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    fn locate(&self, role: &str, vertex: &V) -> Result<usize> {
        match self.index.get(vertex) {
            Some(&slot) => Ok(slot),
            None => {
                debug!(role, vertex = ?vertex, "bfs: vertex not in graph");
                Err(BfsError::not_in_graph(role, vertex))
            }
        }
    }

    fn discover(&mut self, slot: usize, distance: u32, predecessor: Option<usize>) {
        self.slots[slot] = Slot {
            state: VisitState::Frontier,
            distance: Distance::Reached(distance),
            predecessor,
        };
        self.order.push(slot);
        self.queue.push_back((slot, distance));
    }

    /// Drain the queue. Returns early with the target's slot as soon as it
    /// is discovered.
    fn run<G>(&mut self, graph: &G, max_depth: Option<u32>, target: Option<usize>) -> Result<Option<usize>>
    where
        G: Graph<Vertex = V> + ?Sized,
    {
        while let Some((current, depth)) = self.queue.pop_front() {
            if max_depth.is_some_and(|max| depth >= max) {
                self.slots[current].state = VisitState::Settled;
                continue;
            }

            for neighbor in graph.adjacent(&self.vertices[current]) {
                let Some(&next) = self.index.get(&neighbor) else {
                    debug!(vertex = ?self.vertices[current], neighbor = ?neighbor, "bfs: neighbor outside vertex set");
                    return Err(BfsError::InvalidArgument(format!(
                        "neighbor {neighbor:?} of {:?} is not in the graph's vertex set",
                        self.vertices[current]
                    )));
                };
                if self.slots[next].state == VisitState::Unvisited {
                    self.discover(next, depth + 1, Some(current));
                    if target == Some(next) {
                        trace!(distance = depth + 1, "bfs: target discovered");
                        return Ok(Some(next));
                    }
                }
            }

            self.slots[current].state = VisitState::Settled;
        }
        Ok(None)
    }

    fn into_tree(self, start: usize) -> BfsTree<V> {
        BfsTree {
            vertices: self.vertices,
            index: self.index,
            slots: self.slots,
            order: self.order,
            start,
        }
    }
}

/// Walk predecessor links from `slot` back to the root.
fn reconstruct_path<V: Clone>(vertices: &[V], slots: &[Slot], slot: usize) -> Vec<V> {
    let mut path = vec![vertices[slot].clone()];
    let mut current = slot;
    while let Some(parent) = slots[current].predecessor {
        path.push(vertices[parent].clone());
        current = parent;
    }
    path.reverse();
    path
}

/// Breadth-first traversal from `start` over the whole reachable set.
///
/// Every vertex the graph enumerates appears in the result; vertices that
/// cannot be reached keep `Distance::Unreachable` and no predecessor.
/// Fails with `InvalidArgument` if `start` is not a vertex of `graph`.
pub fn traverse<G>(graph: &G, start: &G::Vertex) -> Result<BfsTree<G::Vertex>>
where
    G: Graph + ?Sized,
{
    traverse_with(graph, start, &TraversalOptions::default())
}

/// [`traverse`] with explicit options (depth bound).
pub fn traverse_with<G>(
    graph: &G,
    start: &G::Vertex,
    options: &TraversalOptions,
) -> Result<BfsTree<G::Vertex>>
where
    G: Graph + ?Sized,
{
    let span = debug_span!("bfs", max_depth = ?options.max_depth, vertices = field::Empty);
    let _guard = span.enter();

    let mut search = Search::init(graph);
    span.record("vertices", search.vertices.len());

    let start = search.locate("start", start)?;
    search.discover(start, 0, None);
    search.run(graph, options.max_depth, None)?;

    let tree = search.into_tree(start);
    debug!(
        reached = tree.reached_count(),
        eccentricity = tree.eccentricity(),
        "bfs: traversal complete"
    );
    Ok(tree)
}

/// Shortest path from `start` to `target`, stopping as soon as `target` is
/// discovered.
///
/// Returns the vertex sequence including both endpoints, `Ok(None)` if
/// `target` is unreachable, and `InvalidArgument` if either endpoint is not
/// a vertex of `graph`.
pub fn shortest_path<G>(
    graph: &G,
    start: &G::Vertex,
    target: &G::Vertex,
) -> Result<Option<Vec<G::Vertex>>>
where
    G: Graph + ?Sized,
{
    let _guard = debug_span!("bfs_shortest_path").entered();

    let mut search = Search::init(graph);
    let start = search.locate("start", start)?;
    let target = search.locate("target", target)?;

    if start == target {
        return Ok(Some(vec![search.vertices[start].clone()]));
    }

    search.discover(start, 0, None);
    let path = search
        .run(graph, None, Some(target))?
        .map(|found| reconstruct_path(&search.vertices, &search.slots, found));

    debug!(
        found = path.is_some(),
        visited = search.order.len(),
        "bfs: shortest path complete"
    );
    Ok(path)
}
