use std::path::PathBuf;

use clap::Parser;

/// Per-station min/mean/max over a `station;measurement` file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Input file, one `key;value` record per line
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}
