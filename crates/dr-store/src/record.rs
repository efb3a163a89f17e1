//! Row types exchanged with the data store.

use serde::{Deserialize, Serialize};

use dr_core::{DistributionId, NodeId};

/// A field officer.  Officers whose office has not been geocoded have no
/// coordinates and are left off the route graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OfficerRecord {
    pub id:        NodeId,
    pub name:      String,
    pub latitude:  Option<f64>,
    pub longitude: Option<f64>,
}

/// A receiver (household, shelter, camp).  Always geocoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiverRecord {
    pub id:        NodeId,
    pub name:      String,
    pub latitude:  f64,
    pub longitude: f64,
    /// 1 (lowest) to 5.  Informational only: routing does not weigh it.
    #[serde(default = "default_priority")]
    pub priority:  u8,
}

fn default_priority() -> u8 {
    1
}

/// A distribution awaiting delivery to a receiver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRecord {
    pub distribution_id: DistributionId,
    pub receiver_id:     NodeId,
}

/// One leg of an optimized route, recorded against the distribution it
/// delivers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSegmentRow {
    pub distribution_id: DistributionId,
    pub from_officer_id: NodeId,
    pub to_receiver_id:  NodeId,
    /// Straight-line distance from the previous point on the path.
    pub distance_km:     f64,
    pub timestamp_unix_secs: i64,
}
