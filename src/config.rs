use clap::Parser;
use std::path::PathBuf;

/// Convert a KMZ file to JSON lines
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "kmz_jsonl")]
#[command(about = "Convert a KMZ file to JSON lines")]
pub struct Config {
    /// KMZ file to read as input
    #[arg(value_name = "INFILE")]
    pub infile: PathBuf,

    /// JSONL file to write as output
    #[arg(value_name = "OUTFILE")]
    pub outfile: PathBuf,

    /// Print out each record as it is written
    #[arg(long)]
    pub verbose: bool,
}
