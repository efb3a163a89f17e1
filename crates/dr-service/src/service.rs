//! The request-level entry points.

use tracing::{debug, info};

use dr_core::{NodeId, RouteConfig};
use dr_graph::{Graph, GraphBuilder, find_nearest_receivers, optimize_route, total_distance_km};
use dr_store::{LocationSource, RouteSegmentRow, SegmentSink};

use crate::segments::route_segments;
use crate::{GraphNodeSummary, GraphSummary, RoutePoint, RouteRequest, RouteResponse, ServiceResult};

/// Plans routes against the locations currently in `source`.
///
/// The graph is rebuilt from the source on every call and dropped when the
/// call returns, so concurrent or back-to-back requests never share state
/// and always see the latest locations.
pub struct RouteService<S> {
    source: S,
    config: RouteConfig,
}

impl<S: LocationSource> RouteService<S> {
    /// Create a service; fails if `config` does not validate.
    pub fn new(source: S, config: RouteConfig) -> ServiceResult<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Load every officer and receiver and connect them.
    pub fn build_graph(&self) -> ServiceResult<Graph> {
        let officers = self.source.officers()?;
        let receivers = self.source.receivers()?;

        let mut builder = GraphBuilder::new(self.config.connect_threshold_km);
        let mut unmapped = 0usize;
        for officer in &officers {
            if !builder.add_officer(officer.id, &officer.name, officer.latitude, officer.longitude) {
                unmapped += 1;
            }
        }
        for receiver in &receivers {
            builder.add_receiver(receiver.id, &receiver.name, receiver.latitude, receiver.longitude);
        }
        debug!(
            officers = officers.len(),
            unmapped_officers = unmapped,
            receivers = receivers.len(),
            "building location graph"
        );
        Ok(builder.build())
    }

    /// Node and edge counts for the diagnostic view.
    pub fn graph_summary(&self) -> ServiceResult<GraphSummary> {
        let graph = self.build_graph()?;
        let mut nodes: Vec<GraphNodeSummary> = graph
            .nodes()
            .map(|n| GraphNodeSummary {
                id:             n.id,
                name:           n.name.clone(),
                kind:           n.kind,
                latitude:       n.pos.lat,
                longitude:      n.pos.lon,
                neighbor_count: n.neighbors.len(),
            })
            .collect();
        nodes.sort_unstable_by_key(|n| n.id);

        Ok(GraphSummary {
            total_nodes: graph.node_count(),
            total_edges: graph.undirected_edge_count(),
            nodes,
        })
    }

    /// Plan a route for `request`.
    ///
    /// Unreachable receivers are left out of the path.  An unknown start
    /// officer is an error.
    pub fn calculate_optimal_route(&self, request: &RouteRequest) -> ServiceResult<RouteResponse> {
        let graph = self.build_graph()?;
        let max_stops = request
            .constraints
            .max_stops
            .unwrap_or(self.config.default_max_stops);

        let nodes = optimize_route(&graph, request.start_officer_id, &request.receiver_ids, max_stops)?;
        let total_distance = total_distance_km(&nodes);
        let path: Vec<RoutePoint> = nodes.into_iter().map(RoutePoint::from).collect();
        let directions = directions(&path);

        info!(
            start = %request.start_officer_id,
            requested = request.receiver_ids.len(),
            hops = path.len().saturating_sub(1),
            km = total_distance,
            "route optimized"
        );

        Ok(RouteResponse {
            path,
            total_distance,
            estimated_time: self.config.estimated_minutes(total_distance),
            fuel_cost:      self.config.fuel_cost(total_distance),
            directions,
        })
    }

    /// Up to `count` receivers nearest `officer_id` by hop count.
    pub fn find_nearest_receivers(&self, officer_id: NodeId, count: usize) -> ServiceResult<Vec<RoutePoint>> {
        let graph = self.build_graph()?;
        let nearest = find_nearest_receivers(&graph, officer_id, count)?;
        Ok(nearest.into_iter().map(RoutePoint::from).collect())
    }
}

impl<S: LocationSource + SegmentSink> RouteService<S> {
    /// Derive the segments of `response` and save them to the source.
    /// Returns the saved rows.
    pub fn record_segments(
        &mut self,
        request:             &RouteRequest,
        response:            &RouteResponse,
        timestamp_unix_secs: i64,
    ) -> ServiceResult<Vec<RouteSegmentRow>> {
        let distributions = self.source.distributions()?;
        let rows = route_segments(request, &response.path, &distributions, timestamp_unix_secs);
        let saved = self.source.save_segments(&rows)?;
        info!(saved, "route segments recorded");
        Ok(rows)
    }
}

fn directions(path: &[RoutePoint]) -> Vec<String> {
    path.windows(2)
        .map(|pair| format!("From {} to {}", pair[0].name, pair[1].name))
        .collect()
}
