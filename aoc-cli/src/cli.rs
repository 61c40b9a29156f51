//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers and submit their answers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Cache directory for puzzle inputs and samples
    #[arg(long, default_value = "~/.cache/aoc_solver")]
    pub cache_dir: PathBuf,

    /// Submission history file [default: <cache-dir>/submissions.json]
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Submit answers for every selected part, not only the opted-in ones
    #[arg(long)]
    pub submit: bool,

    /// Wait out submission throttling and resubmit
    #[arg(long)]
    pub auto_retry: bool,

    /// Quiet mode - only output answers and warnings
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
