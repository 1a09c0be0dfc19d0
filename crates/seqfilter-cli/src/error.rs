//! Error types for the seqfilter CLI
//!
//! User-facing errors with messages that point at the flag or file to fix.

use seqfilter_common::FilterError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Filtering failed (bad input, bad table, I/O)
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// `--table` and `--columns` were not given in pairs
    #[error("{columns} --columns value(s) given for {tables} --table file(s). Pass one --columns per --table.")]
    ColumnsMismatch { tables: usize, columns: usize },

    /// Configuration value is invalid
    #[error("Configuration error: {0}. Check your config file and SEQFILTER_* environment variables.")]
    Config(String),

    /// Configuration file could not be read
    #[error("Cannot read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML
    #[error("Failed to parse config file: {0}. Check the TOML syntax.")]
    ConfigParse(#[from] toml::de::Error),

    /// JSON summary could not be produced
    #[error("Failed to write JSON summary: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to the terminal failed
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
