//! Partitioning engine
//!
//! Streams records once, sending each to the positive sink when its
//! identifier is in the [`IdSet`] and to the negative sink otherwise.

use crate::ids::IdSet;
use crate::io::{create_output, open_input, RecordSink, SeqReader, SeqWriter};
use crate::record::{strip_pair_suffix, SequenceRecord};
use seqfilter_common::{FilterError, MatchLogic, Result, SeqFormat};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

/// Records between progress callbacks
pub const PROGRESS_INTERVAL: u64 = 1_000;

/// Per-run behavior of the filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// FASTA wrap width; 0 writes each sequence on one line
    pub line_width: usize,
    /// Match `read/1` and `read/2` against `read`
    pub drop_pair_suffix: bool,
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    /// Distinct identifiers in the lookup set
    pub identifiers: usize,
    pub records: u64,
    pub matched: u64,
    pub unmatched: u64,
}

/// Partition a record stream into positive and negative sinks
///
/// Either sink may be `None`, in which case those records are only counted.
/// `on_progress` is called every [`PROGRESS_INTERVAL`] records and once at
/// the end. Both sinks are flushed before returning.
pub fn partition<I, P, N, F>(
    records: I,
    ids: &IdSet,
    mut positive: Option<&mut P>,
    mut negative: Option<&mut N>,
    options: &FilterOptions,
    mut on_progress: F,
) -> Result<FilterStats>
where
    I: IntoIterator<Item = Result<SequenceRecord>>,
    P: RecordSink + ?Sized,
    N: RecordSink + ?Sized,
    F: FnMut(&FilterStats),
{
    let mut stats = FilterStats {
        identifiers: ids.len(),
        ..FilterStats::default()
    };

    for record in records {
        let record = record?;
        let key = if options.drop_pair_suffix {
            strip_pair_suffix(&record.id)
        } else {
            record.id.as_str()
        };

        if ids.contains(key) {
            stats.matched += 1;
            if let Some(sink) = positive.as_deref_mut() {
                sink.write_record(&record)?;
            }
        } else {
            stats.unmatched += 1;
            if let Some(sink) = negative.as_deref_mut() {
                sink.write_record(&record)?;
            }
        }

        stats.records += 1;
        if stats.records % PROGRESS_INTERVAL == 0 {
            on_progress(&stats);
        }
    }

    if let Some(sink) = positive {
        sink.finish()?;
    }
    if let Some(sink) = negative {
        sink.finish()?;
    }

    on_progress(&stats);
    Ok(stats)
}

/// A tabular identifier source: file plus zero-based columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    pub path: PathBuf,
    pub columns: Vec<usize>,
}

/// Everything needed to filter one sequence file on disk
#[derive(Debug, Clone, Default)]
pub struct FilterRequest {
    pub input: PathBuf,
    /// Inferred from the input file name when `None`
    pub format: Option<SeqFormat>,
    pub tables: Vec<TableSource>,
    pub id_list: Option<String>,
    pub logic: MatchLogic,
    pub positive: Option<PathBuf>,
    pub negative: Option<PathBuf>,
    pub options: FilterOptions,
}

impl FilterRequest {
    /// The effective sequence format
    pub fn resolve_format(&self) -> Result<SeqFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => SeqFormat::from_path(&self.input).ok_or_else(|| {
                FilterError::UnknownFormat(format!(
                    "cannot infer format from '{}', pass it explicitly",
                    self.input.display()
                ))
            }),
        }
    }

    /// Check outputs and paths before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.positive.is_none() && self.negative.is_none() {
            return Err(FilterError::NoOutputs);
        }
        if self.tables.is_empty() && self.id_list.is_none() {
            return Err(FilterError::config(
                "no identifiers given: provide a tabular file or an identifier list",
            ));
        }

        let outputs = [
            ("positive output", self.positive.as_deref()),
            ("negative output", self.negative.as_deref()),
        ];

        for (name, output) in outputs {
            let Some(output) = output else { continue };
            if same_path(output, &self.input) {
                return Err(same_path_error(output, "input sequences", name));
            }
            for table in &self.tables {
                if same_path(output, &table.path) {
                    return Err(same_path_error(output, "tabular file", name));
                }
            }
        }

        if let (Some(positive), Some(negative)) = (&self.positive, &self.negative) {
            if same_path(positive, negative) {
                return Err(same_path_error(positive, "positive output", "negative output"));
            }
        }

        Ok(())
    }

    /// Build the combined identifier set from all tables and the inline list
    pub fn load_ids(&self) -> Result<IdSet> {
        let mut sets = Vec::with_capacity(self.tables.len() + 1);

        for table in &self.tables {
            sets.push(IdSet::from_tabular_path(&table.path, &table.columns)?);
        }
        if let Some(ref list) = self.id_list {
            sets.push(IdSet::from_id_list(list));
        }

        let ids = IdSet::combine(sets, self.logic);
        if self.options.drop_pair_suffix {
            Ok(ids.without_pair_suffixes())
        } else {
            Ok(ids)
        }
    }
}

/// Validate the request, load identifiers and filter the input file
pub fn run<F>(request: &FilterRequest, on_progress: F) -> Result<FilterStats>
where
    F: FnMut(&FilterStats),
{
    let _span = info_span!("filter", input = %request.input.display()).entered();

    request.validate()?;
    let format = request.resolve_format()?;

    let ids = request.load_ids()?;
    if ids.is_empty() {
        info!("Identifier set is empty, no record will match");
    }
    debug!(identifiers = ids.len(), %format, logic = %request.logic, "Identifier set ready");

    let reader = SeqReader::new(format, open_input(&request.input)?);
    let width = request.options.line_width;

    let mut positive = match request.positive {
        Some(ref path) => Some(SeqWriter::new(format, create_output(path)?, width)),
        None => None,
    };
    let mut negative = match request.negative {
        Some(ref path) => Some(SeqWriter::new(format, create_output(path)?, width)),
        None => None,
    };

    let stats = partition(
        reader,
        &ids,
        positive.as_mut(),
        negative.as_mut(),
        &request.options,
        on_progress,
    )?;

    info!(
        records = stats.records,
        matched = stats.matched,
        unmatched = stats.unmatched,
        "Filtering complete"
    );
    Ok(stats)
}

fn same_path(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn same_path_error(path: &Path, first: &'static str, second: &'static str) -> FilterError {
    FilterError::SamePath {
        path: path.to_path_buf(),
        first,
        second,
    }
}
