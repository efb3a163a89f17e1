//! Unit tests for dr-service.

#[cfg(test)]
mod helpers {
    use dr_core::{DistributionId, NodeId};
    use dr_store::{DistributionRecord, MemorySource, OfficerRecord, ReceiverRecord};

    pub fn officer(id: u32, name: &str, lat: Option<f64>, lon: Option<f64>) -> OfficerRecord {
        OfficerRecord { id: NodeId(id), name: name.into(), latitude: lat, longitude: lon }
    }

    pub fn receiver(id: u32, name: &str, lat: f64, lon: f64) -> ReceiverRecord {
        ReceiverRecord { id: NodeId(id), name: name.into(), latitude: lat, longitude: lon, priority: 1 }
    }

    /// Colombo office with one receiver 2.2 km away and one in Kandy,
    /// ~95 km away and therefore isolated.
    pub fn colombo() -> MemorySource {
        MemorySource::new(
            vec![
                officer(1, "Colombo office", Some(6.9271), Some(79.8612)),
                officer(9, "Unmapped office", None, None),
            ],
            vec![
                receiver(2, "Wellawatte", 6.9344, 79.8428),
                receiver(3, "Kandy", 7.2906, 80.6337),
            ],
        )
        .with_distributions(vec![
            DistributionRecord { distribution_id: DistributionId(20), receiver_id: NodeId(2) },
            DistributionRecord { distribution_id: DistributionId(30), receiver_id: NodeId(3) },
        ])
    }
}

#[cfg(test)]
mod service {
    use approx::assert_abs_diff_eq;

    use dr_core::{NodeId, NodeKind, RouteConfig, haversine_km};
    use dr_graph::GraphError;

    use super::helpers::colombo;
    use crate::{RouteRequest, RouteService, ServiceError};

    fn service() -> RouteService<dr_store::MemorySource> {
        RouteService::new(colombo(), RouteConfig::default()).unwrap()
    }

    #[test]
    fn graph_skips_unmapped_officers() {
        let graph = service().build_graph().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert!(!graph.contains(NodeId(9)));
        assert_eq!(graph.undirected_edge_count(), 1);
    }

    #[test]
    fn graph_summary_counts() {
        let summary = service().graph_summary().unwrap();
        assert_eq!(summary.total_nodes, 3);
        assert_eq!(summary.total_edges, 1);
        let ids: Vec<u32> = summary.nodes.iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(summary.nodes[0].neighbor_count, 1);
        assert_eq!(summary.nodes[2].neighbor_count, 0);
        assert_eq!(summary.nodes[2].kind, NodeKind::Receiver);
    }

    #[test]
    fn colombo_route() {
        let request = RouteRequest::new(NodeId(1), vec![NodeId(2), NodeId(3)]);
        let response = service().calculate_optimal_route(&request).unwrap();

        let ids: Vec<u32> = response.path.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2]);

        let expected = haversine_km(6.9271, 79.8612, 6.9344, 79.8428);
        assert_abs_diff_eq!(response.total_distance, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(response.estimated_time, expected * 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(response.fuel_cost, expected * 0.15, epsilon = 1e-9);
        assert_eq!(response.directions, vec!["From Colombo office to Wellawatte".to_string()]);
    }

    #[test]
    fn empty_request_is_start_only() {
        let request = RouteRequest::new(NodeId(1), vec![]);
        let response = service().calculate_optimal_route(&request).unwrap();
        assert_eq!(response.path.len(), 1);
        assert_eq!(response.total_distance, 0.0);
        assert!(response.directions.is_empty());
    }

    #[test]
    fn request_stop_cap_overrides_config() {
        let mut request = RouteRequest::new(NodeId(1), vec![NodeId(2)]);
        request.constraints.max_stops = Some(0);
        let response = service().calculate_optimal_route(&request).unwrap();
        assert!(response.path.is_empty());
    }

    #[test]
    fn threshold_comes_from_config() {
        let config = RouteConfig { connect_threshold_km: 1.0, ..RouteConfig::default() };
        let svc = RouteService::new(colombo(), config).unwrap();
        assert_eq!(svc.build_graph().unwrap().edge_count(), 0);

        let request = RouteRequest::new(NodeId(1), vec![NodeId(2)]);
        let response = svc.calculate_optimal_route(&request).unwrap();
        assert!(response.path.is_empty());
        assert_eq!(response.total_distance, 0.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RouteConfig { minutes_per_km: f64::NAN, ..RouteConfig::default() };
        assert!(matches!(
            RouteService::new(colombo(), config),
            Err(ServiceError::Config(_))
        ));
    }

    #[test]
    fn unknown_start_officer_is_an_error() {
        let request = RouteRequest::new(NodeId(9), vec![NodeId(2)]);
        let err = service().calculate_optimal_route(&request).unwrap_err();
        assert!(matches!(err, ServiceError::Graph(GraphError::NodeNotFound(NodeId(9)))));
    }

    #[test]
    fn nearest_receivers() {
        let nearest = service().find_nearest_receivers(NodeId(1), 5).unwrap();
        assert_eq!(nearest.len(), 1);
        assert_eq!(nearest[0].name, "Wellawatte");
        assert_eq!(nearest[0].kind, NodeKind::Receiver);
    }

    #[test]
    fn segments_are_recorded() {
        let mut svc = service();
        let request = RouteRequest::new(NodeId(1), vec![NodeId(2), NodeId(3)]);
        let response = svc.calculate_optimal_route(&request).unwrap();
        let rows = svc.record_segments(&request, &response, 1_700_000_000).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].distribution_id.0, 20);
        assert_eq!(rows[0].from_officer_id, NodeId(1));
        assert_eq!(rows[0].to_receiver_id, NodeId(2));
        assert_abs_diff_eq!(rows[0].distance_km, response.total_distance, epsilon = 1e-9);
        assert_eq!(svc.into_source().segments.len(), 1);
    }
}

#[cfg(test)]
mod segments {
    use dr_core::{DistributionId, NodeId, NodeKind};
    use dr_store::DistributionRecord;

    use crate::{RoutePoint, RouteRequest, route_segments};

    fn point(id: u32, kind: NodeKind, lat: f64) -> RoutePoint {
        RoutePoint { id: NodeId(id), name: format!("p{id}"), latitude: lat, longitude: 80.0, kind }
    }

    fn dist(distribution: u32, receiver: u32) -> DistributionRecord {
        DistributionRecord {
            distribution_id: DistributionId(distribution),
            receiver_id:     NodeId(receiver),
        }
    }

    #[test]
    fn only_requested_receivers_with_distributions() {
        // 1 (officer) → 5 (pass-through receiver) → 6 (officer) → 2 → 3
        let path = vec![
            point(1, NodeKind::Officer, 7.00),
            point(5, NodeKind::Receiver, 7.01),
            point(6, NodeKind::Officer, 7.02),
            point(2, NodeKind::Receiver, 7.03),
            point(3, NodeKind::Receiver, 7.04),
        ];
        let request = RouteRequest::new(NodeId(1), vec![NodeId(2), NodeId(3)]);
        let distributions = vec![dist(50, 5), dist(20, 2), dist(21, 2)];

        let rows = route_segments(&request, &path, &distributions, 42);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].distribution_id, DistributionId(20));
        assert_eq!(rows[0].to_receiver_id, NodeId(2));
        assert_eq!(rows[0].timestamp_unix_secs, 42);
        // measured from the preceding point (officer 6), ~1.1 km north
        assert!((rows[0].distance_km - 1.112).abs() < 0.01, "got {}", rows[0].distance_km);
    }

    #[test]
    fn single_point_path_has_no_segments() {
        let path = vec![point(1, NodeKind::Officer, 7.0)];
        let request = RouteRequest::new(NodeId(1), vec![]);
        assert!(route_segments(&request, &path, &[dist(1, 1)], 0).is_empty());
    }
}

#[cfg(test)]
mod dto {
    use dr_core::{NodeId, NodeKind};

    use crate::{RoutePoint, RouteRequest};

    #[test]
    fn request_defaults_from_json() {
        let json = r#"{"startOfficerId": 1, "receiverIds": [2, 3]}"#;
        let request: RouteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_officer_id, NodeId(1));
        assert_eq!(request.receiver_ids, vec![NodeId(2), NodeId(3)]);
        assert_eq!(request.constraints.max_stops, None);
        assert_eq!(request.constraints.max_distance_km, 100.0);
        assert!(!request.constraints.avoid_highways);
    }

    #[test]
    fn request_constraints_from_json() {
        let json = r#"{
            "startOfficerId": 1,
            "receiverIds": [2],
            "constraints": {"maxDistance": 40.0, "maxStops": 3, "avoidHighways": true}
        }"#;
        let request: RouteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.constraints.max_stops, Some(3));
        assert_eq!(request.constraints.max_distance_km, 40.0);
        assert!(request.constraints.avoid_highways);
    }

    #[test]
    fn constraints_keep_wire_names() {
        let json = r#"{"startOfficerId": 1, "receiverIds": [2], "constraints": {"maxDistance": 40.0}}"#;
        let request: RouteRequest = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["constraints"]["maxDistance"], 40.0);
        assert!(value["constraints"].get("maxDistanceKm").is_none());

        let again: RouteRequest = serde_json::from_value(value).unwrap();
        assert_eq!(again, request);
    }

    #[test]
    fn point_serializes_kind_as_type() {
        let point = RoutePoint {
            id:        NodeId(2),
            name:      "Wellawatte".into(),
            latitude:  6.9344,
            longitude: 79.8428,
            kind:      NodeKind::Receiver,
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["type"], "Receiver");
        assert_eq!(value["id"], 2);
        assert_eq!(value["latitude"], 6.9344);
    }
}
