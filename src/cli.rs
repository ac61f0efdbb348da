use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "logtally")]
#[command(
    author,
    version,
    about = "Validate scanner log records and count unique filenames per extension"
)]
#[command(long_about = "Reads one JSON record per line, checks every field of each record, \
    and prints how many distinct file names were seen per extension among the records that \
    passed.\n\n\
    Exit codes:\n  \
    0 - Input fully processed (rejected records do not fail the run)\n  \
    2 - Input could not be read, or invalid configuration")]
pub struct Cli {
    /// Input file with one JSON record per line (`-` reads stdin)
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Print violations for each rejected line (-v); -vv also enables debug logs
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress per-line diagnostics
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format [possible values: text, json] (overrides config)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Sort report lines by extension
    #[arg(long)]
    pub sort: bool,

    /// Worker threads; 1 is sequential, 0 uses all cores (overrides config)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
