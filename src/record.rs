/// One `key<delimiter>value` line, borrowed from the read buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    pub key: &'a [u8],
    pub value: f64,
}

impl<'a> Record<'a> {
    /// Splits `line` on the first `delimiter` and parses the rest as a number.
    ///
    /// Returns `None` for anything that is not a well-formed record: no
    /// delimiter, a value field that is not a complete decimal number (which
    /// includes fields carrying a second delimiter), or a non-finite value.
    /// Malformed lines are skipped silently by callers.
    #[inline]
    pub fn parse(line: &'a [u8], delimiter: u8) -> Option<Self> {
        let split = line.iter().position(|&b| b == delimiter)?;
        let (key, rest) = line.split_at(split);
        let value = fast_float::parse::<f64, _>(&rest[1..]).ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Record { key, value })
    }
}

/// Strips the line terminator: `\n`, then a trailing `\r` if present.
#[inline]
pub(crate) fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
