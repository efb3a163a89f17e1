//! `dr-store`: where locations come from and where route segments go.
//!
//! The planner does not own the officer and receiver tables; it reads them
//! through [`LocationSource`] at the start of every request and hands the
//! resulting route segments to a [`SegmentSink`].
//!
//! | Feature   | Backend   | Source                     | Sink                 |
//! |-----------|-----------|----------------------------|----------------------|
//! | *(none)*  | memory    | `MemorySource`             | `MemorySource`       |
//! | *(none)*  | CSV       | `CsvSource` (directory)    | `CsvSegmentWriter`   |
//! | `sqlite`  | SQLite    | `SqliteStore`              | `SqliteStore`        |

pub mod csv;
pub mod error;
pub mod memory;
pub mod record;
pub mod source;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use crate::csv::{
    CsvSegmentWriter, CsvSource, load_distributions_reader, load_officers_reader,
    load_receivers_reader,
};
pub use error::{StoreError, StoreResult};
pub use memory::MemorySource;
pub use record::{DistributionRecord, OfficerRecord, ReceiverRecord, RouteSegmentRow};
pub use source::{LocationSource, SegmentSink};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
