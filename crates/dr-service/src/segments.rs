//! Turn an optimized path into per-delivery route segments.

use dr_core::haversine_km;
use dr_store::{DistributionRecord, RouteSegmentRow};

use crate::{RoutePoint, RouteRequest};

/// One segment per requested receiver the path reaches.
///
/// Walking `path` from its second point on, every receiver that was part of
/// the request and has a pending distribution produces a segment from the
/// request's officer, measured as the straight-line distance from the
/// preceding point.  The first matching distribution of a receiver is used.
/// Officers and pass-through receivers that were not requested produce
/// nothing.
pub fn route_segments(
    request:             &RouteRequest,
    path:                &[RoutePoint],
    distributions:       &[DistributionRecord],
    timestamp_unix_secs: i64,
) -> Vec<RouteSegmentRow> {
    let relevant: Vec<&DistributionRecord> = distributions
        .iter()
        .filter(|d| request.receiver_ids.contains(&d.receiver_id))
        .collect();

    path.windows(2)
        .filter(|pair| pair[1].kind.is_receiver())
        .filter_map(|pair| {
            let (prev, point) = (&pair[0], &pair[1]);
            let distribution = relevant.iter().find(|d| d.receiver_id == point.id)?;
            Some(RouteSegmentRow {
                distribution_id: distribution.distribution_id,
                from_officer_id: request.start_officer_id,
                to_receiver_id:  point.id,
                distance_km:     haversine_km(prev.latitude, prev.longitude, point.latitude, point.longitude),
                timestamp_unix_secs,
            })
        })
        .collect()
}
