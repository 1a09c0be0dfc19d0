//! seqfilter Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging and error handling for the seqfilter workspace.
//!
//! # Overview
//!
//! - **Error Handling**: [`FilterError`] and the [`Result`] alias
//! - **Logging**: `tracing` subscriber setup shared by every binary
//! - **Types**: sequence formats and identifier-set combination logic
//!
//! # Example
//!
//! ```
//! use seqfilter_common::types::SeqFormat;
//!
//! let format: SeqFormat = "fastqsanger".parse().unwrap();
//! assert_eq!(format, SeqFormat::Fastq);
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{FilterError, Result};
pub use types::{MatchLogic, SeqFormat};
