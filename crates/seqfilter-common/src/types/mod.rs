//! Common types used across seqfilter

use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Flat-text sequence file format
///
/// The output format always equals the input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeqFormat {
    Fasta,
    Fastq,
}

impl SeqFormat {
    /// Infer the format from a file name extension.
    ///
    /// A trailing `.gz` is ignored, so `reads.fq.gz` is FASTQ.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let name = path.as_ref().file_name()?.to_str()?.to_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        let ext = Path::new(name).extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl std::str::FromStr for SeqFormat {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fasta" | "fa" | "fas" | "fna" | "faa" => Ok(SeqFormat::Fasta),
            // Galaxy datatype names for the FASTQ quality encodings
            "fastq" | "fq" | "fastqsanger" | "fastqillumina" | "fastqsolexa"
            | "fastqcssanger" => Ok(SeqFormat::Fastq),
            _ => Err(FilterError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for SeqFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeqFormat::Fasta => write!(f, "fasta"),
            SeqFormat::Fastq => write!(f, "fastq"),
        }
    }
}

/// How identifier sets from several tabular files are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchLogic {
    /// An identifier listed in any table matches
    #[default]
    Union,
    /// An identifier must be listed in every table
    Intersection,
}

impl std::str::FromStr for MatchLogic {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "union" | "any" => Ok(MatchLogic::Union),
            "intersection" | "all" => Ok(MatchLogic::Intersection),
            _ => Err(FilterError::config(format!(
                "invalid match logic '{}', expected 'union' or 'intersection'",
                s
            ))),
        }
    }
}

impl std::fmt::Display for MatchLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchLogic::Union => write!(f, "union"),
            MatchLogic::Intersection => write!(f, "intersection"),
        }
    }
}
