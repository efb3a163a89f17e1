//! Source and sink traits.

use crate::{DistributionRecord, OfficerRecord, ReceiverRecord, RouteSegmentRow, StoreResult};

/// Read access to the location tables.
///
/// Called once per request; implementations return a fresh snapshot each
/// time and must not assume the caller caches anything.
pub trait LocationSource {
    fn officers(&self) -> StoreResult<Vec<OfficerRecord>>;

    fn receivers(&self) -> StoreResult<Vec<ReceiverRecord>>;

    /// Distributions awaiting delivery.  Sources without distribution data
    /// report none.
    fn distributions(&self) -> StoreResult<Vec<DistributionRecord>> {
        Ok(Vec::new())
    }
}

/// Destination for route segments produced by an optimization.
pub trait SegmentSink {
    /// Persist `rows`; returns how many were written.
    fn save_segments(&mut self, rows: &[RouteSegmentRow]) -> StoreResult<usize>;
}
