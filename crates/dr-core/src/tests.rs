//! Unit tests for dr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DistributionId, NodeId};

    #[test]
    fn ordering_and_conversion() {
        assert!(NodeId(1) < NodeId(2));
        assert_eq!(NodeId::from(42u32), NodeId(42));
        assert_eq!(NodeId(42).get(), 42);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(DistributionId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{GeoPoint, haversine_km};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(6.9271, 79.8612);
        assert_eq!(p.distance_km(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 2π · 6371 / 360 ≈ 111.195 km
        let d = haversine_km(30.0, -88.0, 31.0, -88.0);
        assert_abs_diff_eq!(d, 111.195, epsilon = 0.01);
    }

    #[test]
    fn colombo_short_hop() {
        let officer = GeoPoint::new(6.9271, 79.8612);
        let receiver = GeoPoint::new(6.9344, 79.8428);
        let d = officer.distance_km(receiver);
        assert!((2.0..2.4).contains(&d), "got {d}");
    }

    #[test]
    fn colombo_to_kandy_is_beyond_threshold() {
        let d = haversine_km(6.9271, 79.8612, 7.2906, 80.6337);
        assert!(d > 50.0, "got {d}");
    }

    #[test]
    fn symmetric_and_non_negative() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = GeoPoint::new(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0));
            let b = GeoPoint::new(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0));
            let ab = a.distance_km(b);
            let ba = b.distance_km(a);
            assert!(ab >= 0.0);
            assert_abs_diff_eq!(ab, ba, epsilon = 1e-9);
        }
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert_abs_diff_eq!(d, std::f64::consts::PI * 6_371.0, epsilon = 1e-6);
    }
}

#[cfg(test)]
mod kind {
    use crate::NodeKind;

    #[test]
    fn labels() {
        assert_eq!(NodeKind::Officer.to_string(), "Officer");
        assert_eq!(NodeKind::Receiver.as_str(), "Receiver");
        assert!(NodeKind::Receiver.is_receiver());
        assert!(!NodeKind::Officer.is_receiver());
    }
}

#[cfg(test)]
mod config {
    use approx::assert_relative_eq;

    use crate::{CoreError, RouteConfig};

    #[test]
    fn defaults_match_service_policy() {
        let cfg = RouteConfig::default();
        assert_eq!(cfg.connect_threshold_km, 50.0);
        assert_eq!(cfg.minutes_per_km, 2.0);
        assert_eq!(cfg.fuel_cost_per_km, 0.15);
        assert_eq!(cfg.default_max_stops, 10);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = RouteConfig::from_yaml_str("connect_threshold_km: 25.0\n").unwrap();
        assert_eq!(cfg.connect_threshold_km, 25.0);
        assert_eq!(cfg.minutes_per_km, 2.0);
        assert_eq!(cfg.default_max_stops, 10);
    }

    #[test]
    fn negative_values_rejected() {
        let err = RouteConfig::from_yaml_str("fuel_cost_per_km: -1.0\n").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = RouteConfig::from_yaml_str("minutes_per_km: [fast]\n").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn estimates() {
        let cfg = RouteConfig::default();
        assert_relative_eq!(cfg.estimated_minutes(10.0), 20.0);
        assert_relative_eq!(cfg.fuel_cost(10.0), 1.5);
    }

    #[test]
    fn yaml_file_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("route.yaml");
        std::fs::write(&path, "minutes_per_km: 1.5\ndefault_max_stops: 4\n").unwrap();
        let cfg = RouteConfig::from_yaml_file(&path).unwrap();
        assert_eq!(cfg.minutes_per_km, 1.5);
        assert_eq!(cfg.default_max_stops, 4);
    }
}
