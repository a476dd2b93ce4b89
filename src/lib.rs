//! Per-key min/mean/max over `key;value` measurement files, in one pass.
//!
//! ```
//! use std::io::Cursor;
//! use brc_stats::Aggregator;
//!
//! let outcome = Aggregator::new()
//!     .run(Cursor::new("Hamburg;12.0\nBulawayo;8.9\nHamburg;16.5\n"))
//!     .unwrap();
//! assert_eq!(outcome.summary(), "{Bulawayo=8.9/8.9/8.9, Hamburg=12.0/14.3/16.5}");
//! ```

pub mod accumulator;
pub mod aggregator;
pub mod error;
pub mod record;
pub mod summary;
pub mod table;

pub use accumulator::Accumulator;
pub use aggregator::{Aggregator, Outcome, DEFAULT_DELIMITER};
pub use error::{Error, Result};
pub use record::Record;
pub use summary::{round_tenths, Summary, SummaryEntry};
pub use table::AggregationTable;
