//! SQLite store (feature `sqlite`).
//!
//! Schema, created on open if absent:
//!
//! | Table           | Columns                                                        |
//! |-----------------|----------------------------------------------------------------|
//! | `officers`      | `officer_id`, `name`, `latitude` (nullable), `longitude` (nullable) |
//! | `receivers`     | `receiver_id`, `name`, `latitude`, `longitude`, `priority`     |
//! | `distributions` | `distribution_id`, `receiver_id`                               |
//! | `routes`        | `route_id`, `distribution_id`, `from_officer_id`, `to_receiver_id`, `distance_km`, `timestamp` |
//!
//! Only the columns the planner uses are declared; an application database
//! with a wider schema works as long as these columns exist.

use std::path::Path;

use rusqlite::{Connection, params};
use tracing::debug;

use dr_core::{DistributionId, NodeId};

use crate::{
    DistributionRecord, LocationSource, OfficerRecord, ReceiverRecord, RouteSegmentRow,
    SegmentSink, StoreResult,
};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS officers (
        officer_id INTEGER PRIMARY KEY,
        name       TEXT NOT NULL,
        latitude   REAL,
        longitude  REAL
    );
    CREATE TABLE IF NOT EXISTS receivers (
        receiver_id INTEGER PRIMARY KEY,
        name        TEXT NOT NULL,
        latitude    REAL NOT NULL,
        longitude   REAL NOT NULL,
        priority    INTEGER NOT NULL DEFAULT 1
    );
    CREATE TABLE IF NOT EXISTS distributions (
        distribution_id INTEGER PRIMARY KEY,
        receiver_id     INTEGER NOT NULL
    );
    CREATE TABLE IF NOT EXISTS routes (
        route_id        INTEGER PRIMARY KEY AUTOINCREMENT,
        distribution_id INTEGER NOT NULL,
        from_officer_id INTEGER NOT NULL,
        to_receiver_id  INTEGER NOT NULL,
        distance_km     REAL NOT NULL,
        timestamp       INTEGER NOT NULL
    );";

/// Location source and segment sink backed by one SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Private in-memory database, mostly for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn insert_officer(&self, officer: &OfficerRecord) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO officers (officer_id, name, latitude, longitude) \
             VALUES (?1, ?2, ?3, ?4)",
            params![officer.id.0, officer.name, officer.latitude, officer.longitude],
        )?;
        Ok(())
    }

    pub fn insert_receiver(&self, receiver: &ReceiverRecord) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO receivers (receiver_id, name, latitude, longitude, priority) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                receiver.id.0,
                receiver.name,
                receiver.latitude,
                receiver.longitude,
                receiver.priority,
            ],
        )?;
        Ok(())
    }

    pub fn insert_distribution(&self, distribution: &DistributionRecord) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO distributions (distribution_id, receiver_id) VALUES (?1, ?2)",
            params![distribution.distribution_id.0, distribution.receiver_id.0],
        )?;
        Ok(())
    }

    /// Every saved segment, newest first.
    pub fn segments(&self) -> StoreResult<Vec<RouteSegmentRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT distribution_id, from_officer_id, to_receiver_id, distance_km, timestamp \
             FROM routes ORDER BY timestamp DESC, route_id DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RouteSegmentRow {
                    distribution_id:     DistributionId(row.get(0)?),
                    from_officer_id:     NodeId(row.get(1)?),
                    to_receiver_id:      NodeId(row.get(2)?),
                    distance_km:         row.get(3)?,
                    timestamp_unix_secs: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl LocationSource for SqliteStore {
    fn officers(&self) -> StoreResult<Vec<OfficerRecord>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT officer_id, name, latitude, longitude FROM officers ORDER BY officer_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(OfficerRecord {
                    id:        NodeId(row.get(0)?),
                    name:      row.get(1)?,
                    latitude:  row.get(2)?,
                    longitude: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = rows.len(), "loaded officers");
        Ok(rows)
    }

    fn receivers(&self) -> StoreResult<Vec<ReceiverRecord>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT receiver_id, name, latitude, longitude, priority FROM receivers \
             ORDER BY receiver_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ReceiverRecord {
                    id:        NodeId(row.get(0)?),
                    name:      row.get(1)?,
                    latitude:  row.get(2)?,
                    longitude: row.get(3)?,
                    priority:  row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = rows.len(), "loaded receivers");
        Ok(rows)
    }

    fn distributions(&self) -> StoreResult<Vec<DistributionRecord>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT distribution_id, receiver_id FROM distributions ORDER BY distribution_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(DistributionRecord {
                    distribution_id: DistributionId(row.get(0)?),
                    receiver_id:     NodeId(row.get(1)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl SegmentSink for SqliteStore {
    fn save_segments(&mut self, rows: &[RouteSegmentRow]) -> StoreResult<usize> {
        if rows.is_empty() {
            return Ok(0);
        }
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO routes \
                 (distribution_id, from_officer_id, to_receiver_id, distance_km, timestamp) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.distribution_id.0,
                    row.from_officer_id.0,
                    row.to_receiver_id.0,
                    row.distance_km,
                    row.timestamp_unix_secs,
                ])?;
            }
        }
        tx.commit()?;
        debug!(count = rows.len(), "saved route segments");
        Ok(rows.len())
    }
}
