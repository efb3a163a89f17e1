//! `donroute`: plan delivery routes from the command line.
//!
//! Locations come from a CSV directory (`--data-dir`) or a SQLite database
//! (`--db`).  Results are printed to stdout as pretty JSON; logs go to stderr
//! and follow `RUST_LOG` (default `info`).
//!
//! ```text
//! donroute --data-dir data optimize --start 1 --receivers 2,3,4
//! donroute --db donations.db optimize --start 1 --receivers 2,3 --record
//! donroute --data-dir data nearest --officer 1 --count 5
//! donroute --db donations.db graph
//! donroute --db donations.db segments
//! ```

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dr_core::{NodeId, RouteConfig};
use dr_service::{RouteRequest, RouteService};
use dr_store::{
    CsvSegmentWriter, CsvSource, DistributionRecord, LocationSource, OfficerRecord,
    ReceiverRecord, RouteSegmentRow, SegmentSink, SqliteStore, StoreResult,
};


/// Largest `--count` accepted by `nearest`.
const MAX_NEAREST: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "donroute", version, about = "Route planner for donation deliveries")]
struct Cli {
    /// YAML file overriding the default route settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    data: DataArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct DataArgs {
    /// Directory holding officers.csv, receivers.csv and (optionally)
    /// distributions.csv.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// SQLite database file.
    #[arg(long)]
    db: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route from an officer through a set of receivers.
    Optimize {
        #[arg(long)]
        start: u32,

        /// Comma-separated receiver ids; at least one.
        #[arg(long, value_delimiter = ',', required = true, num_args = 1..)]
        receivers: Vec<u32>,

        /// Stop cap; defaults to the configured value.
        #[arg(long)]
        max_stops: Option<usize>,

        /// Save the route's segments (SQLite `routes` table, or
        /// `--segments-out` for a CSV data directory).
        #[arg(long)]
        record: bool,

        /// CSV file that receives recorded segments in CSV mode.
        #[arg(long, requires = "record")]
        segments_out: Option<PathBuf>,
    },

    /// Receivers closest to an officer by hop count.
    Nearest {
        #[arg(long)]
        officer: u32,

        #[arg(long, default_value_t = 5)]
        count: usize,
    },

    /// Node and edge counts of the location graph.
    Graph,

    /// Segments saved in the database, newest first.
    Segments,
}

// ── Backends ──────────────────────────────────────────────────────────────────

/// The data backend chosen on the command line.
enum Store {
    Csv { source: CsvSource, sink: Option<CsvSegmentWriter> },
    Sqlite(SqliteStore),
}

impl LocationSource for Store {
    fn officers(&self) -> StoreResult<Vec<OfficerRecord>> {
        match self {
            Store::Csv { source, .. } => source.officers(),
            Store::Sqlite(db) => db.officers(),
        }
    }

    fn receivers(&self) -> StoreResult<Vec<ReceiverRecord>> {
        match self {
            Store::Csv { source, .. } => source.receivers(),
            Store::Sqlite(db) => db.receivers(),
        }
    }

    fn distributions(&self) -> StoreResult<Vec<DistributionRecord>> {
        match self {
            Store::Csv { source, .. } => source.distributions(),
            Store::Sqlite(db) => db.distributions(),
        }
    }
}

impl SegmentSink for Store {
    fn save_segments(&mut self, rows: &[RouteSegmentRow]) -> StoreResult<usize> {
        match self {
            Store::Csv { sink: Some(writer), .. } => writer.save_segments(rows),
            Store::Csv { sink: None, .. } => Ok(0),
            Store::Sqlite(db) => db.save_segments(rows),
        }
    }
}

fn open_store(data: &DataArgs, segments_out: Option<&PathBuf>) -> Result<Store> {
    if let Some(path) = &data.db {
        let db = SqliteStore::open(path)
            .with_context(|| format!("opening database {}", path.display()))?;
        return Ok(Store::Sqlite(db));
    }
    let Some(dir) = &data.data_dir else {
        bail!("one of --data-dir or --db is required");
    };
    let sink = segments_out
        .map(|path| {
            CsvSegmentWriter::create(path)
                .with_context(|| format!("creating segment file {}", path.display()))
        })
        .transpose()?;
    Ok(Store::Csv { source: CsvSource::new(dir), sink })
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RouteConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RouteConfig::default(),
    };

    let output = run(cli, config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, config: RouteConfig) -> Result<Value> {
    match cli.command {
        Command::Optimize { start, receivers, max_stops, record, segments_out } => {
            if record && cli.data.db.is_none() && segments_out.is_none() {
                bail!("--record with --data-dir needs --segments-out <file>");
            }
            let store = open_store(&cli.data, segments_out.as_ref())?;
            let mut service = RouteService::new(store, config)?;

            let mut request = RouteRequest::new(
                NodeId(start),
                receivers.into_iter().map(NodeId).collect(),
            );
            request.constraints.max_stops = max_stops;

            let response = service.calculate_optimal_route(&request)?;
            if record {
                let rows = service.record_segments(&request, &response, unix_now())?;
                info!(rows = rows.len(), "segments saved");
            }
            Ok(serde_json::to_value(response)?)
        }

        Command::Nearest { officer, count } => {
            if !(1..=MAX_NEAREST).contains(&count) {
                bail!("--count must be between 1 and {MAX_NEAREST}, got {count}");
            }
            let service = RouteService::new(open_store(&cli.data, None)?, config)?;
            let nearest = service.find_nearest_receivers(NodeId(officer), count)?;
            Ok(serde_json::to_value(nearest)?)
        }

        Command::Graph => {
            let service = RouteService::new(open_store(&cli.data, None)?, config)?;
            Ok(serde_json::to_value(service.graph_summary()?)?)
        }

        Command::Segments => {
            let Some(path) = &cli.data.db else {
                bail!("segments are only stored in a database; pass --db");
            };
            let db = SqliteStore::open(path)
                .with_context(|| format!("opening database {}", path.display()))?;
            Ok(serde_json::to_value(db.segments()?)?)
        }
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
