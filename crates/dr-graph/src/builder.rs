//! Graph construction from officer and receiver locations.
//!
//! # Connectivity rule
//!
//! Every unordered pair of distinct locations whose haversine distance is at
//! most `threshold_km` is joined by one undirected edge weighted with that
//! distance.  Both endpoints also record the distance in their neighbor
//! cache.  Locations farther than the threshold from everything are isolated;
//! routing to or from them reports "unreachable".
//!
//! # Scale
//!
//! Pairing is O(N²) haversine evaluations.  That is fine for the regional
//! deployments this serves (tens to a few hundred locations).  Beyond a few
//! thousand locations the build dominates request latency; a spatial
//! prefilter would fix that without changing which pairs connect.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use dr_core::{GeoPoint, NodeId, NodeKind};

use crate::graph::{Graph, LocationNode};

/// Accumulates locations, then connects them in [`build`](Self::build).
///
/// # Example
///
/// ```
/// use dr_core::NodeId;
/// use dr_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new(50.0);
/// b.add_officer(NodeId(1), "Colombo office", Some(6.9271), Some(79.8612));
/// b.add_receiver(NodeId(2), "Wellawatte shelter", 6.9344, 79.8428);
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // one connection, both directions
/// ```
pub struct GraphBuilder {
    threshold_km: f64,
    nodes:        Vec<LocationNode>,
    index:        FxHashMap<NodeId, usize>,
}

impl GraphBuilder {
    pub fn new(threshold_km: f64) -> Self {
        Self {
            threshold_km,
            nodes: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    /// Add an officer.  Officers without both coordinates are not placed on
    /// the map and are skipped; returns whether the officer was added.
    pub fn add_officer(
        &mut self,
        id:   NodeId,
        name: &str,
        lat:  Option<f64>,
        lon:  Option<f64>,
    ) -> bool {
        let (Some(lat), Some(lon)) = (lat, lon) else {
            debug!(%id, name, "officer has no coordinates; not added to graph");
            return false;
        };
        self.push(LocationNode::new(id, GeoPoint::new(lat, lon), NodeKind::Officer, name));
        true
    }

    /// Add a receiver.  Receivers always carry coordinates.
    pub fn add_receiver(&mut self, id: NodeId, name: &str, lat: f64, lon: f64) {
        self.push(LocationNode::new(id, GeoPoint::new(lat, lon), NodeKind::Receiver, name));
    }

    /// Add a prepared node.  A node whose id is already present replaces it.
    pub fn push(&mut self, node: LocationNode) {
        match self.index.get(&node.id) {
            Some(&slot) => {
                let old = &self.nodes[slot];
                warn!(
                    id = %node.id,
                    replaced = %old.kind,
                    by = %node.kind,
                    "location id used twice; officer and receiver keys are expected to be disjoint"
                );
                self.nodes[slot] = node;
            }
            None => {
                self.index.insert(node.id, self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Connect all pairs within the threshold and produce the [`Graph`].
    ///
    /// Pairs are visited in insertion order, so adjacency lists (and hence
    /// BFS visiting order) follow the order locations were added.
    pub fn build(self) -> Graph {
        let mut nodes = self.nodes;
        let mut connections: Vec<(usize, usize, f64)> = Vec::new();

        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let d = nodes[i].pos.distance_km(nodes[j].pos);
                if d <= self.threshold_km {
                    connections.push((i, j, d));
                }
            }
        }

        for &(i, j, d) in &connections {
            let (a, b) = (nodes[i].id, nodes[j].id);
            nodes[i].add_neighbor(b, d);
            nodes[j].add_neighbor(a, d);
        }

        let ids: Vec<NodeId> = nodes.iter().map(|n| n.id).collect();
        let mut graph = Graph::with_capacity(nodes.len());
        for node in nodes {
            graph.add_node(node);
        }
        for (i, j, d) in connections {
            graph.add_edge(ids[i], ids[j], d);
        }

        debug!(
            nodes = graph.node_count(),
            connections = graph.undirected_edge_count(),
            threshold_km = self.threshold_km,
            "location graph built"
        );
        graph
    }
}
