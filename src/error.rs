use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions of an aggregation run. Malformed lines are not errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be opened.
    #[error("failed to open {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An I/O error interrupted the scan; no summary is produced.
    #[error("failed to read input: {source}")]
    ReadFailure {
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
