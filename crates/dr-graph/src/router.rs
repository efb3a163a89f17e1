//! Shortest paths: the `Router` trait and the default Dijkstra implementation.
//!
//! # Scratch state
//!
//! Tentative distance, predecessor and visited flag are kept in a side table
//! created fresh for every query, never on the graph's nodes.  Queries are
//! therefore independent of one another and need no reset step.
//!
//! # Unreachable targets
//!
//! A target that cannot be reached (different component, or an id the graph
//! does not know) yields [`ShortestPath::unreachable`]: an empty path with an
//! infinite distance.  Callers check [`ShortestPath::is_reachable`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use dr_core::NodeId;

use crate::graph::{Graph, LocationNode};

// ── ShortestPath ──────────────────────────────────────────────────────────────

/// The result of a shortest-path query.
#[derive(Debug, Clone)]
pub struct ShortestPath<'g> {
    /// Nodes to traverse in order, source first and destination last.
    pub nodes: Vec<&'g LocationNode>,
    /// Total edge weight in kilometres; `f64::INFINITY` when unreachable.
    pub distance_km: f64,
}

impl<'g> ShortestPath<'g> {
    pub fn unreachable() -> Self {
        Self { nodes: Vec::new(), distance_km: f64::INFINITY }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance_km.is_finite()
    }

    pub fn ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }
}

/// Settled distances from one source to every node it can reach.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: FxHashMap<NodeId, f64>,
}

impl DistanceTable {
    /// Distance to `id`; `f64::INFINITY` when `id` is unreachable.
    pub fn distance_km(&self, id: NodeId) -> f64 {
        self.distances.get(&id).copied().unwrap_or(f64::INFINITY)
    }

    pub fn is_reachable(&self, id: NodeId) -> bool {
        self.distances.contains_key(&id)
    }

    /// Number of reachable nodes, the source included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine used by the route optimizer.
pub trait Router {
    /// Shortest path from `from` to `to`.
    fn shortest_path<'g>(&self, graph: &'g Graph, from: NodeId, to: NodeId) -> ShortestPath<'g>;

    /// Distances from `from` to every reachable node.
    fn distances_from(&self, graph: &Graph, from: NodeId) -> DistanceTable;
}

/// Dijkstra's algorithm with a binary heap and lazy deletion.
///
/// Instead of decreasing a key in place, an improved node is pushed again and
/// the older, larger entry is skipped when it surfaces.  Entries with equal
/// distance pop in insertion order.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path<'g>(&self, graph: &'g Graph, from: NodeId, to: NodeId) -> ShortestPath<'g> {
        shortest_path(graph, from, to)
    }

    fn distances_from(&self, graph: &Graph, from: NodeId) -> DistanceTable {
        shortest_path_tree(graph, from)
    }
}

/// Shortest path from `start` to `end`.  See the module docs for the
/// unreachable convention.
pub fn shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> ShortestPath<'_> {
    if !graph.contains(start) || !graph.contains(end) {
        return ShortestPath::unreachable();
    }

    let scratch = dijkstra(graph, start, Some(end));
    let Some(distance_km) = scratch.get(&end).map(|s| s.distance) else {
        return ShortestPath::unreachable();
    };
    if !distance_km.is_finite() {
        return ShortestPath::unreachable();
    }

    ShortestPath { nodes: reconstruct(graph, &scratch, end), distance_km }
}

/// Distances from `start` to every node reachable from it.  Empty when
/// `start` is not in the graph.
pub fn shortest_path_tree(graph: &Graph, start: NodeId) -> DistanceTable {
    if !graph.contains(start) {
        return DistanceTable::default();
    }
    let distances = dijkstra(graph, start, None)
        .into_iter()
        .filter(|(_, s)| s.distance.is_finite())
        .map(|(id, s)| (id, s.distance))
        .collect();
    DistanceTable { distances }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct Scratch {
    distance: f64,
    previous: Option<NodeId>,
    visited:  bool,
}

impl Default for Scratch {
    fn default() -> Self {
        Self { distance: f64::INFINITY, previous: None, visited: false }
    }
}

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// distance first, and the earliest push among equal distances.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    distance: f64,
    seq:      u64,
    node:     NodeId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Run Dijkstra from `start`, stopping once `target` is settled (or when the
/// frontier empties if there is no target).  Returns the scratch table.
fn dijkstra(graph: &Graph, start: NodeId, target: Option<NodeId>) -> FxHashMap<NodeId, Scratch> {
    let mut scratch: FxHashMap<NodeId, Scratch> = FxHashMap::default();
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    scratch.insert(start, Scratch { distance: 0.0, ..Scratch::default() });
    heap.push(Frontier { distance: 0.0, seq, node: start });

    while let Some(Frontier { distance, node, .. }) = heap.pop() {
        let current = scratch.entry(node).or_default();
        if current.visited || distance > current.distance {
            continue; // stale entry
        }
        if Some(node) == target {
            break;
        }
        current.visited = true;

        for edge in graph.neighbors(node) {
            if !graph.contains(edge.to) {
                continue;
            }
            let next = scratch.entry(edge.to).or_default();
            if next.visited {
                continue;
            }
            let candidate = distance + edge.weight_km;
            if candidate < next.distance {
                next.distance = candidate;
                next.previous = Some(node);
                seq += 1;
                heap.push(Frontier { distance: candidate, seq, node: edge.to });
            }
        }
    }

    scratch
}

fn reconstruct<'g>(
    graph:   &'g Graph,
    scratch: &FxHashMap<NodeId, Scratch>,
    end:     NodeId,
) -> Vec<&'g LocationNode> {
    let mut path = Vec::new();
    let mut cursor = Some(end);
    while let Some(id) = cursor {
        let Some(node) = graph.node(id) else { break };
        path.push(node);
        cursor = scratch.get(&id).and_then(|s| s.previous);
    }
    path.reverse();
    path
}
