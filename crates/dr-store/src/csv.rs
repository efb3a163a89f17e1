//! CSV source and segment writer.
//!
//! # Directory layout
//!
//! ```text
//! officers.csv        id,name,latitude,longitude
//! receivers.csv       id,name,latitude,longitude[,priority]
//! distributions.csv   distribution_id,receiver_id        (optional)
//! ```
//!
//! Officer coordinates may be left empty:
//!
//! ```csv
//! id,name,latitude,longitude
//! 1,Colombo office,6.9271,79.8612
//! 7,Unmapped office,,
//! ```
//!
//! Every file is re-read on each call, so edits are picked up by the next
//! request.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::Writer;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    DistributionRecord, LocationSource, OfficerRecord, ReceiverRecord, RouteSegmentRow,
    SegmentSink, StoreResult,
};

pub const OFFICERS_FILE: &str = "officers.csv";
pub const RECEIVERS_FILE: &str = "receivers.csv";
pub const DISTRIBUTIONS_FILE: &str = "distributions.csv";

// ── Reader-based loaders ──────────────────────────────────────────────────────

fn load_reader<T: DeserializeOwned, R: Read>(reader: R) -> StoreResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<T>() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Parse officer rows from any `Read` source.
pub fn load_officers_reader<R: Read>(reader: R) -> StoreResult<Vec<OfficerRecord>> {
    load_reader(reader)
}

/// Parse receiver rows from any `Read` source.
pub fn load_receivers_reader<R: Read>(reader: R) -> StoreResult<Vec<ReceiverRecord>> {
    load_reader(reader)
}

/// Parse distribution rows from any `Read` source.
pub fn load_distributions_reader<R: Read>(reader: R) -> StoreResult<Vec<DistributionRecord>> {
    load_reader(reader)
}

// ── CsvSource ─────────────────────────────────────────────────────────────────

/// Reads locations from a directory of CSV files.
#[derive(Clone, Debug)]
pub struct CsvSource {
    dir: PathBuf,
}

impl CsvSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LocationSource for CsvSource {
    fn officers(&self) -> StoreResult<Vec<OfficerRecord>> {
        let rows = load_officers_reader(File::open(self.dir.join(OFFICERS_FILE))?)?;
        debug!(count = rows.len(), dir = %self.dir.display(), "loaded officers");
        Ok(rows)
    }

    fn receivers(&self) -> StoreResult<Vec<ReceiverRecord>> {
        let rows = load_receivers_reader(File::open(self.dir.join(RECEIVERS_FILE))?)?;
        debug!(count = rows.len(), dir = %self.dir.display(), "loaded receivers");
        Ok(rows)
    }

    /// Missing `distributions.csv` means no pending distributions.
    fn distributions(&self) -> StoreResult<Vec<DistributionRecord>> {
        let path = self.dir.join(DISTRIBUTIONS_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        load_distributions_reader(File::open(path)?)
    }
}

// ── CsvSegmentWriter ──────────────────────────────────────────────────────────

/// Appends route segments to a CSV file, writing the header once.
pub struct CsvSegmentWriter {
    writer: Writer<File>,
}

impl CsvSegmentWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> StoreResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record([
            "distribution_id",
            "from_officer_id",
            "to_receiver_id",
            "distance_km",
            "timestamp_unix_secs",
        ])?;
        writer.flush()?;
        Ok(Self { writer })
    }
}

impl SegmentSink for CsvSegmentWriter {
    fn save_segments(&mut self, rows: &[RouteSegmentRow]) -> StoreResult<usize> {
        for row in rows {
            self.writer.write_record(&[
                row.distribution_id.0.to_string(),
                row.from_officer_id.0.to_string(),
                row.to_receiver_id.0.to_string(),
                format!("{:.3}", row.distance_km),
                row.timestamp_unix_secs.to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(rows.len())
    }
}
