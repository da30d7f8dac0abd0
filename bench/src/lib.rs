//! Deterministic synthetic graphs for benchmarking bfs-core.
//!
//! All generators are O(n) or O(n + edges), single-threaded and seeded, so
//! the same `vertex_count` always yields the same graph. Vertex 0 always
//! exists and is a sensible traversal root.

use std::collections::VecDeque;

use bfs_core::AdjacencyGraph;

pub type Generator = fn(u64) -> AdjacencyGraph<u64>;

/// Every generator with a display name, in benchmark order.
pub const GENERATORS: [(&str, Generator); 6] = [
    ("lsystem", gen_lsystem),
    ("scalefree", gen_scale_free),
    ("smallworld", gen_small_world),
    ("random", gen_random),
    ("barbell", gen_barbell),
    ("dla", gen_dla),
];

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// L-system fractal tree: every vertex spawns 3 children.
///
/// Log depth with exponential width; exercises deep queues and long
/// predecessor chains.
pub fn gen_lsystem(vertex_count: u64) -> AdjacencyGraph<u64> {
    let mut graph = AdjacencyGraph::with_capacity(vertex_count as usize);
    let branching = 3u64;
    graph.add_vertex(0);

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < vertex_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= vertex_count {
                    break;
                }
                graph.add_edge(parent, next_id);
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Scale-free via edge-list sampling (preferential attachment).
///
/// Picking a random endpoint of a random existing edge favours high-degree
/// vertices, producing hubs.
pub fn gen_scale_free(vertex_count: u64) -> AdjacencyGraph<u64> {
    let edges_per_vertex = 10u64;
    let mut graph = AdjacencyGraph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(12345);

    let mut endpoints: Vec<u64> = Vec::with_capacity((vertex_count * edges_per_vertex * 2) as usize);

    // Seed clique
    let seed = 5u64.min(vertex_count);
    for i in 0..seed {
        graph.add_vertex(i);
    }
    for i in 0..seed {
        for j in (i + 1)..seed {
            graph.add_edge(i, j);
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for new_vertex in seed..vertex_count {
        graph.add_vertex(new_vertex);
        for _ in 0..edges_per_vertex.min(new_vertex) {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            if target != new_vertex {
                graph.add_edge(new_vertex, target);
                endpoints.push(new_vertex);
                endpoints.push(target);
            }
        }
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice, each edge rewired with p = 0.05.
pub fn gen_small_world(vertex_count: u64) -> AdjacencyGraph<u64> {
    let k = 10u64;
    let p = 0.05f64;
    let mut graph = AdjacencyGraph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..vertex_count {
        graph.add_vertex(i);
    }

    for i in 0..vertex_count {
        for j in 1..=k {
            let neighbor = (i + j) % vertex_count;
            if rng.next_f64() < p {
                let rewired = rng.next(vertex_count);
                graph.add_edge(i, if rewired != i { rewired } else { neighbor });
            } else {
                graph.add_edge(i, neighbor);
            }
        }
    }

    graph
}

/// Erdos-Renyi: ~10 uniform random edges per vertex, no structure.
pub fn gen_random(vertex_count: u64) -> AdjacencyGraph<u64> {
    let target_edges = vertex_count * 10;
    let mut graph = AdjacencyGraph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(54321);

    for i in 0..vertex_count {
        graph.add_vertex(i);
    }

    for _ in 0..target_edges {
        let from = rng.next(vertex_count);
        let to = rng.next(vertex_count);
        if from != to {
            graph.add_edge(from, to);
        }
    }

    graph
}

/// Barbell: two dense clusters joined by a 10-vertex bridge.
///
/// Everything on the far side sits behind one bottleneck.
pub fn gen_barbell(vertex_count: u64) -> AdjacencyGraph<u64> {
    let bridge_len = 10u64;
    let cluster = vertex_count.saturating_sub(bridge_len) / 2;
    let mut graph = AdjacencyGraph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(99999);

    let mut connect_cluster = |graph: &mut AdjacencyGraph<u64>, offset: u64| {
        for i in 0..cluster {
            graph.add_vertex(offset + i);
        }
        for i in 0..cluster {
            for _ in 0..20u64.min(cluster.saturating_sub(1)) {
                let target = rng.next(cluster);
                if target != i {
                    graph.add_edge(offset + i, offset + target);
                }
            }
        }
    };

    connect_cluster(&mut graph, 0);

    // Bridge: last vertex of A through the chain to the first vertex of B
    let bridge_start = cluster;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        if i == 0 {
            if cluster > 0 {
                graph.add_edge(cluster - 1, id);
            } else {
                graph.add_vertex(id);
            }
        } else {
            graph.add_edge(id - 1, id);
        }
    }

    let b_start = bridge_start + bridge_len;
    connect_cluster(&mut graph, b_start);
    if cluster > 0 {
        graph.add_edge(b_start - 1, b_start);
    }

    graph
}

/// Diffusion-limited aggregation: each new vertex sticks to a recent
/// "surface" vertex, with a 10% chance of a second long-range edge.
pub fn gen_dla(vertex_count: u64) -> AdjacencyGraph<u64> {
    let mut graph = AdjacencyGraph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(77777);

    graph.add_vertex(0);

    let surface_max = 10000usize;
    let mut surface: VecDeque<u64> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_vertex in 1..vertex_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        graph.add_edge(new_vertex, attach_to);

        if rng.next(10) == 0 && new_vertex > 1 {
            let other = rng.next(new_vertex);
            if other != attach_to {
                graph.add_edge(new_vertex, other);
            }
        }

        surface.push_back(new_vertex);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfs_core::{traverse, Distance, Graph, TraversalDirection};

    #[test]
    fn test_generators_produce_requested_vertices() {
        for (name, generator) in GENERATORS {
            let graph = generator(500);
            assert_eq!(graph.vertex_count(), 500, "{name}");
            assert!(graph.contains(&0), "{name}");
        }
    }

    #[test]
    fn test_generators_deterministic() {
        for (name, generator) in GENERATORS {
            let a = generator(300);
            let b = generator(300);
            assert_eq!(a.edge_count(), b.edge_count(), "{name}");
            assert_eq!(
                a.adjacent(&7).collect::<Vec<_>>(),
                b.adjacent(&7).collect::<Vec<_>>(),
                "{name}"
            );
        }
    }

    #[test]
    fn test_lsystem_is_ternary_tree() {
        let graph = gen_lsystem(40);
        assert_eq!(graph.edge_count(), 39);
        let tree = traverse(&graph, &0).unwrap();
        assert!(tree.spans_graph());
        // 1 + 3 + 9 = 13 vertices within depth 2, vertex 13 opens depth 3
        assert_eq!(tree.distance(&12), Some(Distance::Reached(2)));
        assert_eq!(tree.distance(&13), Some(Distance::Reached(3)));
    }

    #[test]
    fn test_barbell_crosses_bridge() {
        let graph = gen_barbell(110);
        let tree = traverse(&graph.view(TraversalDirection::Both), &0).unwrap();
        assert!(tree.is_reached(&109));
        assert!(tree.is_reached(&55));
    }

    #[test]
    fn test_dla_connected() {
        let graph = gen_dla(1000);
        let tree = traverse(&graph.view(TraversalDirection::Both), &0).unwrap();
        assert!(tree.spans_graph());
    }

    #[test]
    fn test_small_world_ring_connected() {
        let graph = gen_small_world(200);
        let tree = traverse(&graph.view(TraversalDirection::Both), &0).unwrap();
        assert!(tree.spans_graph());
    }
}
