use ahash::RandomState;
use hashbrown::HashMap;

use crate::accumulator::Accumulator;
use crate::record::Record;
use crate::summary::{Summary, SummaryEntry};

/// Per-key accumulators for one aggregation pass.
///
/// Keys are raw bytes and compared byte for byte.
#[derive(Debug, Default)]
pub struct AggregationTable {
    entries: HashMap<Box<[u8]>, Accumulator, RandomState>,
}

impl AggregationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and folds one line; malformed lines leave the table untouched.
    #[inline]
    pub fn observe_line(&mut self, line: &[u8], delimiter: u8) {
        if let Some(record) = Record::parse(line, delimiter) {
            self.observe(record);
        }
    }

    #[inline]
    pub fn observe(&mut self, record: Record<'_>) {
        let value = record.value;
        self.entries
            .entry_ref(record.key)
            .and_modify(|e| e.observe(value))
            .or_insert_with(|| Accumulator::new(value));
    }

    pub fn get(&self, key: &[u8]) -> Option<&Accumulator> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted projection: one entry per key, ascending byte order.
    pub fn into_summary(self) -> Summary {
        let mut entries = self
            .entries
            .into_iter()
            .map(|(key, acc)| SummaryEntry {
                key,
                min: acc.min(),
                mean: acc.mean(),
                max: acc.max(),
            })
            .collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.key.cmp(&b.key));
        Summary::new(entries)
    }
}
