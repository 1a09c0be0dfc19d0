//! Identifier sets built from tabular files
//!
//! A tabular file is tab-separated text. Lines starting with `#` are comments;
//! blank lines are ignored. Every configured column must exist on every data
//! line.

use crate::io::{open_input, trim_line_end};
use crate::record::strip_pair_suffix;
use seqfilter_common::{FilterError, MatchLogic, Result};
use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, warn};

/// Parse a one-based, comma-separated column list into zero-based indices
///
/// Duplicates are dropped; the first occurrence keeps its position.
pub fn parse_columns(spec: &str) -> Result<Vec<usize>> {
    let mut columns = Vec::new();

    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(FilterError::invalid_columns(spec, "empty column entry"));
        }
        let column: usize = part.parse().map_err(|_| {
            FilterError::invalid_columns(spec, format!("'{}' is not a column number", part))
        })?;
        if column == 0 {
            return Err(FilterError::invalid_columns(spec, "columns are numbered from 1"));
        }
        if !columns.contains(&(column - 1)) {
            columns.push(column - 1);
        }
    }

    Ok(columns)
}

/// Set of sequence identifiers to match against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: HashSet<String>,
}

impl IdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect identifiers from the given zero-based columns of a tabular stream
    ///
    /// `source` names the stream in error messages.
    pub fn from_tabular<R: BufRead>(reader: R, columns: &[usize], source: &str) -> Result<Self> {
        if columns.is_empty() {
            return Err(FilterError::invalid_columns("", "no columns given"));
        }

        let mut set = Self::new();
        let mut warned_whitespace = false;

        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let line = trim_line_end(&line);
            if line.starts_with(b"#") || line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let line = String::from_utf8_lossy(line);
            let fields: Vec<&str> = line.split('\t').collect();

            for &column in columns {
                let value = fields.get(column).ok_or_else(|| FilterError::ColumnOutOfRange {
                    path: source.to_string(),
                    line: index + 1,
                    column: column + 1,
                    width: fields.len(),
                })?;

                let value = value.trim();
                let Some(first_word) = value.split_whitespace().next() else {
                    continue;
                };
                if first_word.len() != value.len() && !warned_whitespace {
                    warn!(
                        source,
                        line = index + 1,
                        value,
                        "Identifier contains whitespace, only the first word is used"
                    );
                    warned_whitespace = true;
                }
                set.insert(first_word);
            }
        }

        debug!(source, ids = set.len(), "Loaded identifiers from table");
        Ok(set)
    }

    /// Open a tabular file (optionally gzip-compressed) and collect identifiers
    pub fn from_tabular_path(path: &Path, columns: &[usize]) -> Result<Self> {
        let reader = open_input(path)?;
        Self::from_tabular(reader, columns, &path.display().to_string())
    }

    /// Identifiers given inline, separated by whitespace, commas or semicolons
    pub fn from_id_list(text: &str) -> Self {
        text.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .filter(|id| !id.is_empty())
            .collect()
    }

    /// Combine several sets; an empty input yields an empty set
    pub fn combine(sets: Vec<IdSet>, logic: MatchLogic) -> Self {
        let mut sets = sets.into_iter();
        let Some(first) = sets.next() else {
            return Self::new();
        };

        match logic {
            MatchLogic::Union => sets.fold(first, |mut acc, set| {
                acc.ids.extend(set.ids);
                acc
            }),
            MatchLogic::Intersection => sets.fold(first, |mut acc, set| {
                acc.ids.retain(|id| set.ids.contains(id));
                acc
            }),
        }
    }

    /// Copy of the set with `/1` and `/2` read-pair suffixes removed
    pub fn without_pair_suffixes(&self) -> Self {
        self.ids.iter().map(|id| strip_pair_suffix(id)).collect()
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for IdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
