//! Error types for seqfilter

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for seqfilter operations
pub type Result<T> = std::result::Result<T, FilterError>;

/// Main error type for seqfilter
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid column specification '{spec}': {reason}")]
    InvalidColumns { spec: String, reason: String },

    #[error("Column {column} requested but line {line} of '{path}' has only {width} column(s)")]
    ColumnOutOfRange {
        path: String,
        line: usize,
        column: usize,
        width: usize,
    },

    #[error("Malformed {format} record at line {line}: {reason}")]
    MalformedRecord {
        format: &'static str,
        line: usize,
        reason: String,
    },

    #[error("No output requested: give a positive and/or a negative output path")]
    NoOutputs,

    #[error("Same file given as both {first} and {second}: '{path}'")]
    SamePath {
        path: PathBuf,
        first: &'static str,
        second: &'static str,
    },

    #[error("Unknown sequence format: {0}")]
    UnknownFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FilterError {
    /// Create a malformed FASTA record error
    pub fn malformed_fasta(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            format: "FASTA",
            line,
            reason: reason.into(),
        }
    }

    /// Create a malformed FASTQ record error
    pub fn malformed_fastq(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            format: "FASTQ",
            line,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_columns(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColumns {
            spec: spec.into(),
            reason: reason.into(),
        }
    }
}
