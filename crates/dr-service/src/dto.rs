//! Request and response payloads.
//!
//! Field names are camelCase on the wire, matching the front end's JSON.

use serde::{Deserialize, Serialize};

use dr_core::{NodeId, NodeKind};
use dr_graph::LocationNode;

// ── Request ───────────────────────────────────────────────────────────────────

/// Ask for a route from an officer through a set of receivers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub start_officer_id: NodeId,
    pub receiver_ids:     Vec<NodeId>,
    #[serde(default)]
    pub constraints:      RouteConstraints,
}

impl RouteRequest {
    pub fn new(start_officer_id: NodeId, receiver_ids: Vec<NodeId>) -> Self {
        Self { start_officer_id, receiver_ids, constraints: RouteConstraints::default() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConstraints {
    /// Advisory; accepted for compatibility but not enforced.
    #[serde(default = "default_max_distance_km", rename = "maxDistance")]
    pub max_distance_km: f64,

    /// Stop cap; `None` uses the configured default.
    #[serde(default)]
    pub max_stops: Option<usize>,

    /// Accepted for compatibility; the location graph has no road classes.
    #[serde(default)]
    pub avoid_highways: bool,
}

fn default_max_distance_km() -> f64 {
    100.0
}

impl Default for RouteConstraints {
    fn default() -> Self {
        Self {
            max_distance_km: default_max_distance_km(),
            max_stops:       None,
            avoid_highways:  false,
        }
    }
}

// ── Response ──────────────────────────────────────────────────────────────────

/// A location on a returned path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub id:        NodeId,
    pub name:      String,
    pub latitude:  f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub kind:      NodeKind,
}

impl From<&LocationNode> for RoutePoint {
    fn from(node: &LocationNode) -> Self {
        Self {
            id:        node.id,
            name:      node.name.clone(),
            latitude:  node.pos.lat,
            longitude: node.pos.lon,
            kind:      node.kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    /// Hop-by-hop path including pass-through locations.
    pub path:           Vec<RoutePoint>,
    /// Kilometres.
    pub total_distance: f64,
    /// Minutes.
    pub estimated_time: f64,
    pub fuel_cost:      f64,
    /// One `"From X to Y"` line per hop.
    pub directions:     Vec<String>,
}

// ── Graph diagnostics ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNodeSummary {
    pub id:             NodeId,
    pub name:           String,
    #[serde(rename = "type")]
    pub kind:           NodeKind,
    pub latitude:       f64,
    pub longitude:      f64,
    pub neighbor_count: usize,
}

/// Snapshot of the location graph for the diagnostic view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    /// Sorted by id.
    pub nodes:       Vec<GraphNodeSummary>,
    pub total_nodes: usize,
    /// Undirected connections.
    pub total_edges: usize,
}
