//! seqfilter CLI Library
//!
//! Command-line interface that splits a FASTA or FASTQ file by whether each
//! record's identifier is listed in a tabular file.
//!
//! - **Identifier sources**: one or more `--table`/`--columns` pairs and an
//!   optional inline `--id-list`
//! - **Outputs**: `--positive` for listed records, `--negative` for the rest
//! - **Configuration**: TOML file and `SEQFILTER_*` environment variables

pub mod commands;
pub mod config;
pub mod error;
pub mod progress;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::Parser;
use seqfilter_common::{MatchLogic, SeqFormat};
use std::path::PathBuf;

/// seqfilter - split FASTA/FASTQ records by identifiers listed in a table
#[derive(Parser, Debug)]
#[command(name = "seqfilter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input FASTA or FASTQ file ("-" for stdin, gzip is detected)
    #[arg(short, long, value_name = "SEQ", required_unless_present = "markdown_help")]
    pub input: Option<PathBuf>,

    /// Sequence format of input and outputs (fasta, fastq); inferred from the
    /// input file extension when omitted
    #[arg(short, long)]
    pub format: Option<SeqFormat>,

    /// Tabular file listing identifiers (repeatable)
    #[arg(short, long = "table", value_name = "TSV")]
    pub tables: Vec<PathBuf>,

    /// One-based, comma-separated columns holding identifiers, one per --table
    /// (e.g. "1" or "1,3")
    #[arg(short, long = "columns", value_name = "COLS")]
    pub columns: Vec<String>,

    /// Identifiers given inline, separated by spaces, commas or semicolons
    #[arg(long, value_name = "IDS")]
    pub id_list: Option<String>,

    /// How identifier sets from several tables are combined (union, intersection)
    #[arg(long)]
    pub logic: Option<MatchLogic>,

    /// Output file for records whose identifier is listed
    #[arg(short, long, value_name = "OUT")]
    pub positive: Option<PathBuf>,

    /// Output file for records whose identifier is not listed
    #[arg(short, long, value_name = "OUT")]
    pub negative: Option<PathBuf>,

    /// Ignore /1 and /2 read-pair suffixes when matching identifiers
    #[arg(long)]
    pub drop_pair_suffix: bool,

    /// Wrap FASTA sequence lines at this width (0 = no wrapping)
    #[arg(long, value_name = "N")]
    pub line_width: Option<usize>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration file (TOML)
    #[arg(long, env = "SEQFILTER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the progress display and the human-readable summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the CLI reference as markdown and exit
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}
