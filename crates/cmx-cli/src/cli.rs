//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default source file name inside the data directory.
pub const STUDY_FILE: &str = "Study_1.csv";

/// Subdirectory of the data directory that receives processed output.
/// It must exist before the run; it is not created.
pub const OUTPUT_SUBDIR: &str = "proc";

/// Default output file name inside the `proc` subdirectory.
pub const OUTPUT_FILE: &str = "study1.tsv";

#[derive(Parser)]
#[command(
    name = "cmx",
    version,
    about = "Augment a study export with BDM complexity columns",
    long_about = "Read a semicolon-delimited study export, score each \
                  behavioral sequence with the Block Decomposition Method \
                  (whole-sequence plus sliding-window profiles), and write \
                  the augmented table as tab-delimited text."
)]
pub struct Cli {
    /// Study data directory containing the source export.
    #[arg(value_name = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Source CSV (default: <DATA_DIR>/Study_1.csv).
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Destination TSV (default: <DATA_DIR>/proc/study1.tsv).
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Effective source path after applying the `--input` override.
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| self.data_dir.join(STUDY_FILE))
    }

    /// Effective destination path after applying the `--output` override.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.data_dir.join(OUTPUT_SUBDIR).join(OUTPUT_FILE))
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
