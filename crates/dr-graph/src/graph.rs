//! In-memory location graph.
//!
//! Vertices are officer and receiver locations keyed by their data-store
//! primary key.  Ids are sparse, so both the node table and the adjacency
//! table are hash maps (FxHash: keys are small integers and the graph is
//! never exposed to untrusted hashing input).
//!
//! Edges are directed records.  [`Graph::add_edge`] writes both directions;
//! [`Graph::add_directed_edge`] writes one.  Neither deduplicates: adding the
//! same connection twice produces parallel edges.  Every algorithm in this
//! crate is correct in the presence of parallel edges, and the builder only
//! ever adds one connection per node pair.

use rustc_hash::FxHashMap;

use dr_core::{GeoPoint, NodeId, NodeKind};

// ── LocationNode ──────────────────────────────────────────────────────────────

/// A graph vertex: the office of an officer or the location of a receiver.
#[derive(Clone, Debug)]
pub struct LocationNode {
    pub id:   NodeId,
    pub pos:  GeoPoint,
    pub kind: NodeKind,
    pub name: String,

    /// Distance cache filled by the builder: neighbor id → kilometres.
    /// Consulted before haversine when totalling a route.
    pub neighbors: FxHashMap<NodeId, f64>,
}

impl LocationNode {
    pub fn new(id: NodeId, pos: GeoPoint, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            kind,
            name: name.into(),
            neighbors: FxHashMap::default(),
        }
    }

    /// Record the distance to a neighbor.  The first recorded value wins.
    pub fn add_neighbor(&mut self, neighbor: NodeId, distance_km: f64) {
        self.neighbors.entry(neighbor).or_insert(distance_km);
    }

    /// Cached distance to `neighbor`, if one was recorded.
    #[inline]
    pub fn neighbor_distance(&self, neighbor: NodeId) -> Option<f64> {
        self.neighbors.get(&neighbor).copied()
    }

    #[inline]
    pub fn is_receiver(&self) -> bool {
        self.kind.is_receiver()
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// Directed adjacency record.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub to:        NodeId,
    pub weight_km: f64,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Weighted graph of locations.
///
/// Edge targets are expected to be node keys.  A target that is not (a
/// dangling reference) is skipped by every traversal rather than reported.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes:     FxHashMap<NodeId, LocationNode>,
    adjacency: FxHashMap<NodeId, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes:     FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            adjacency: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `node`, replacing any node with the same id.
    ///
    /// An empty adjacency list is created for the id if it has none; edges
    /// already recorded for the id are kept.  Returns the replaced node.
    pub fn add_node(&mut self, node: LocationNode) -> Option<LocationNode> {
        let id = node.id;
        self.adjacency.entry(id).or_default();
        self.nodes.insert(id, node)
    }

    /// Add an undirected connection: one directed edge each way.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight_km: f64) {
        self.add_directed_edge(from, to, weight_km);
        self.add_directed_edge(to, from, weight_km);
    }

    /// Add a single directed edge `from → to`.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, weight_km: f64) {
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, weight_km });
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&LocationNode> {
        self.nodes.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Outgoing edges of `id` in insertion order; empty for an unknown id.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All node ids, in no particular order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// All nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &LocationNode> + '_ {
        self.nodes.values()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Number of undirected connections, assuming every edge was added with
    /// [`add_edge`](Self::add_edge).
    pub fn undirected_edge_count(&self) -> usize {
        self.edge_count() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
