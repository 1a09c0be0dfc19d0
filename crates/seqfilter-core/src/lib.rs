//! seqfilter core library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Splits a FASTA or FASTQ file into records whose identifiers are listed in
//! a tabular file and records whose identifiers are not.
//!
//! - [`io`]: streaming FASTA/FASTQ readers and writers
//! - [`ids`]: identifier sets from tabular columns or inline lists
//! - [`filter`]: the single-pass partitioning engine
//!
//! # Example
//!
//! ```no_run
//! use seqfilter_core::filter::{run, FilterRequest, TableSource};
//! use seqfilter_core::ids::parse_columns;
//!
//! # fn main() -> seqfilter_common::Result<()> {
//! let request = FilterRequest {
//!     input: "reads.fastq".into(),
//!     tables: vec![TableSource { path: "hits.tsv".into(), columns: parse_columns("1")? }],
//!     positive: Some("with_hits.fastq".into()),
//!     negative: Some("without_hits.fastq".into()),
//!     ..FilterRequest::default()
//! };
//! let stats = run(&request, |_| {})?;
//! println!("{} matched, {} unmatched", stats.matched, stats.unmatched);
//! # Ok(())
//! # }
//! ```

pub mod filter;
pub mod ids;
pub mod io;
pub mod record;

pub use filter::{partition, run, FilterOptions, FilterRequest, FilterStats, TableSource};
pub use ids::{parse_columns, IdSet};
pub use record::SequenceRecord;
