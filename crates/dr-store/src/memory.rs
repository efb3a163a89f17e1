//! In-memory source, used by tests and by callers that already hold the rows.

use crate::{
    DistributionRecord, LocationSource, OfficerRecord, ReceiverRecord, RouteSegmentRow,
    SegmentSink, StoreResult,
};

#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    pub officers:      Vec<OfficerRecord>,
    pub receivers:     Vec<ReceiverRecord>,
    pub distributions: Vec<DistributionRecord>,
    /// Segments handed to [`SegmentSink::save_segments`].
    pub segments:      Vec<RouteSegmentRow>,
}

impl MemorySource {
    pub fn new(officers: Vec<OfficerRecord>, receivers: Vec<ReceiverRecord>) -> Self {
        Self { officers, receivers, ..Self::default() }
    }

    pub fn with_distributions(mut self, distributions: Vec<DistributionRecord>) -> Self {
        self.distributions = distributions;
        self
    }
}

impl LocationSource for MemorySource {
    fn officers(&self) -> StoreResult<Vec<OfficerRecord>> {
        Ok(self.officers.clone())
    }

    fn receivers(&self) -> StoreResult<Vec<ReceiverRecord>> {
        Ok(self.receivers.clone())
    }

    fn distributions(&self) -> StoreResult<Vec<DistributionRecord>> {
        Ok(self.distributions.clone())
    }
}

impl SegmentSink for MemorySource {
    fn save_segments(&mut self, rows: &[RouteSegmentRow]) -> StoreResult<usize> {
        self.segments.extend_from_slice(rows);
        Ok(rows.len())
    }
}
