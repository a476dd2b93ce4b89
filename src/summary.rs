use std::fmt;
use std::io::{self, Write};

/// min/mean/max for one key, computed once the input is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub key: Box<[u8]>,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Entries in ascending byte order of their keys, rendered as
/// `{k1=min/mean/max, k2=min/mean/max}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    entries: Vec<SummaryEntry>,
}

impl Summary {
    pub(crate) fn new(entries: Vec<SummaryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the summary with keys copied through byte for byte.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(&self.to_bytes())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.entries.len() * 32 + 2);
        out.push(b'{');
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(b", ");
            }
            out.extend_from_slice(&entry.key);
            let stats = format!(
                "={:.1}/{:.1}/{:.1}",
                round_tenths(entry.min),
                round_tenths(entry.mean),
                round_tenths(entry.max)
            );
            out.extend_from_slice(stats.as_bytes());
        }
        out.push(b'}');
        out
    }
}

/// Lossy for keys that are not valid UTF-8; use [`Summary::write_to`] for
/// the exact bytes.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

/// Rounds to one decimal place, halves away from zero.
///
/// `{:.1}` alone rounds exact ties to even (`14.25` would print `14.2`), so
/// the rounding happens here and the formatter only prints the digit.
/// From 2^52 up every float is already whole, and scaling would drop low bits.
#[inline]
pub fn round_tenths(value: f64) -> f64 {
    if value.abs() >= WHOLE_FROM {
        return value;
    }
    (value * 10.0).round() / 10.0
}

const WHOLE_FROM: f64 = 4_503_599_627_370_496.0;
