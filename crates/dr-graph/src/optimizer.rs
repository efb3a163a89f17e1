//! Greedy multi-stop route assembly.
//!
//! # Algorithm
//!
//! 1. No targets: the route is the start node alone.
//! 2. Rank every reachable target by shortest-path distance from the start
//!    (ascending, stable).  Unreachable targets are dropped.
//! 3. Keep the first `max_stops` of them.
//! 4. Walk the kept targets in that order, routing each leg from the previous
//!    stop, and concatenate the legs hop by hop.
//!
//! Step 2 ranks by distance from the *start*, not from the previous stop, so
//! the visiting order can be worse than a nearest-next tour.  Routes are short
//! (≤ 10 stops), so this greedy heuristic is what the service ships; the
//! output is the literal node sequence including pass-through nodes.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use dr_core::{NodeId, haversine_km};

use crate::graph::{Graph, LocationNode};
use crate::router::{DijkstraRouter, Router};
use crate::{GraphError, GraphResult};

/// Route optimizer parameterized over its shortest-path engine.
#[derive(Clone, Debug, Default)]
pub struct RouteOptimizer<R: Router = DijkstraRouter> {
    router: R,
}

impl<R: Router> RouteOptimizer<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    /// Assemble the visiting order from `start` through `receivers`.
    ///
    /// Duplicate ids in `receivers` are considered once.  Returns an empty
    /// route when no receiver is reachable.
    pub fn optimize<'g>(
        &self,
        graph:     &'g Graph,
        start:     NodeId,
        receivers: &[NodeId],
        max_stops: usize,
    ) -> GraphResult<Vec<&'g LocationNode>> {
        let start_node = graph.node(start).ok_or(GraphError::NodeNotFound(start))?;
        if receivers.is_empty() {
            return Ok(vec![start_node]);
        }

        // ── Rank targets by distance from the start ───────────────────────
        let from_start = self.router.distances_from(graph, start);
        let mut seen: FxHashSet<NodeId> = FxHashSet::default();
        let mut ranked: Vec<(NodeId, f64)> = Vec::with_capacity(receivers.len());
        for &id in receivers {
            if !seen.insert(id) {
                continue;
            }
            let d = from_start.distance_km(id);
            if d.is_finite() {
                ranked.push((id, d));
            } else {
                warn!(%start, receiver = %id, "receiver unreachable from start; dropped from route");
            }
        }
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(max_stops);

        // ── Walk the stops, one leg at a time ─────────────────────────────
        let mut route: Vec<&'g LocationNode> = Vec::new();
        let mut current = start;
        for (stop, _) in ranked {
            let leg = self.router.shortest_path(graph, current, stop);
            if leg.nodes.is_empty() {
                continue;
            }
            debug!(from = %current, to = %stop, km = leg.distance_km, hops = leg.nodes.len() - 1, "route leg");
            for node in leg.nodes {
                if node.id != current || route.is_empty() {
                    route.push(node);
                }
            }
            current = stop;
        }

        Ok(route)
    }
}

/// [`RouteOptimizer::optimize`] with the default Dijkstra router.
pub fn optimize_route<'g>(
    graph:     &'g Graph,
    start:     NodeId,
    receivers: &[NodeId],
    max_stops: usize,
) -> GraphResult<Vec<&'g LocationNode>> {
    RouteOptimizer::new(DijkstraRouter).optimize(graph, start, receivers, max_stops)
}

/// Sum of consecutive hop distances in kilometres.
///
/// Each hop uses the first node's neighbor cache when it has an entry for the
/// second node, and haversine between the two coordinates otherwise.  Routes
/// of fewer than two nodes have length zero.
pub fn total_distance_km(route: &[&LocationNode]) -> f64 {
    route
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            a.neighbor_distance(b.id)
                .unwrap_or_else(|| haversine_km(a.pos.lat, a.pos.lon, b.pos.lat, b.pos.lon))
        })
        .sum()
}
