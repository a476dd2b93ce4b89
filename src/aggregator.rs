use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::trim_line_end;
use crate::table::AggregationTable;

pub const DEFAULT_DELIMITER: u8 = b';';
pub const DEFAULT_BUF_CAPACITY: usize = 1024 * 1024;

/// Single-pass min/mean/max aggregation over `key<delimiter>value` lines.
#[derive(Debug, Clone)]
pub struct Aggregator {
    delimiter: u8,
    buf_capacity: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            buf_capacity: DEFAULT_BUF_CAPACITY,
        }
    }
}

/// Result of a completed run: the rendered summary and how long it took.
#[derive(Debug, Clone)]
pub struct Outcome {
    summary: Vec<u8>,
    keys: usize,
    elapsed: Duration,
}

impl Outcome {
    /// Exact summary bytes, keys included as read.
    pub fn summary_bytes(&self) -> &[u8] {
        &self.summary
    }

    pub fn summary(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.summary)
    }

    /// Number of distinct keys in the summary.
    pub fn keys(&self) -> usize {
        self.keys
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read buffer size used by [`Aggregator::run_path`].
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buf_capacity = capacity.max(1);
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Opens `path` and aggregates it. The clock starts before the open.
    pub fn run_path(&self, path: &Path) -> Result<Outcome> {
        let start = Instant::now();
        let file = File::open(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "aggregating");
        let reader = BufReader::with_capacity(self.buf_capacity, file);
        self.run_from(reader, start)
    }

    /// Aggregates every line `reader` yields.
    pub fn run<R: BufRead>(&self, reader: R) -> Result<Outcome> {
        self.run_from(reader, Instant::now())
    }

    fn run_from<R: BufRead>(&self, reader: R, start: Instant) -> Result<Outcome> {
        let table = self.aggregate(reader)?;
        let keys = table.len();
        let summary = table.into_summary().to_bytes();
        let elapsed = start.elapsed();
        debug!(keys, ?elapsed, "aggregation finished");
        Ok(Outcome {
            summary,
            keys,
            elapsed,
        })
    }

    /// Scans `reader` to the end. Any read error aborts the whole pass.
    pub fn aggregate<R: BufRead>(&self, mut reader: R) -> Result<AggregationTable> {
        let mut table = AggregationTable::new();
        let mut line = Vec::with_capacity(128);
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|source| Error::ReadFailure { source })?;
            if read == 0 {
                break;
            }
            table.observe_line(trim_line_end(&line), self.delimiter);
        }
        Ok(table)
    }
}
