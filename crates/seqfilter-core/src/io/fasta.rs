//! FASTA streaming reader and writer
//!
//! Multi-line sequences are joined, and whitespace inside sequence lines is
//! dropped. Only one record is held in memory at a time.

use super::{is_blank, read_line, trim_line_end};
use crate::record::SequenceRecord;
use seqfilter_common::{FilterError, Result};
use std::io::{BufRead, Write};

/// Record-at-a-time FASTA parser
pub struct FastaReader<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    line_number: usize,
    /// Title of the next record, already consumed from the input
    pending_title: Option<Vec<u8>>,
    failed: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(256),
            line_number: 0,
            pending_title: None,
            failed: false,
        }
    }

    fn next_line(&mut self) -> Result<bool> {
        let more = read_line(&mut self.reader, &mut self.line)?;
        if more {
            self.line_number += 1;
        }
        Ok(more)
    }

    fn current_title(&self) -> Vec<u8> {
        trim_line_end(&self.line)[1..].to_vec()
    }

    /// Skip to the first title line; anything but blank lines before it is an error
    fn find_first_title(&mut self) -> Result<Option<Vec<u8>>> {
        while self.next_line()? {
            if self.line.first() == Some(&b'>') {
                return Ok(Some(self.current_title()));
            }
            if !is_blank(&self.line) {
                return Err(FilterError::malformed_fasta(
                    self.line_number,
                    "expected a '>' title line before sequence data",
                ));
            }
        }
        Ok(None)
    }

    fn read_record(&mut self) -> Result<Option<SequenceRecord>> {
        let title = match self.pending_title.take() {
            Some(title) => title,
            None => match self.find_first_title()? {
                Some(title) => title,
                None => return Ok(None),
            },
        };

        let mut seq = Vec::new();
        while self.next_line()? {
            if self.line.first() == Some(&b'>') {
                self.pending_title = Some(self.current_title());
                break;
            }
            seq.extend(self.line.iter().filter(|b| !b.is_ascii_whitespace()));
        }

        Ok(Some(SequenceRecord::from_title(title, seq, None)))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.read_record().transpose();
        if matches!(result, Some(Err(_))) {
            self.failed = true;
        }
        result
    }
}

/// FASTA writer with optional line wrapping
pub struct FastaWriter<W: Write> {
    inner: W,
    line_width: usize,
}

impl<W: Write> FastaWriter<W> {
    /// `line_width` of 0 writes each sequence on a single line
    pub fn new(inner: W, line_width: usize) -> Self {
        Self { inner, line_width }
    }

    pub fn write_record(&mut self, record: &SequenceRecord) -> Result<()> {
        self.inner.write_all(b">")?;
        self.inner.write_all(&record.title)?;
        self.inner.write_all(b"\n")?;

        if record.seq.is_empty() {
            return Ok(());
        }

        if self.line_width == 0 {
            self.inner.write_all(&record.seq)?;
            self.inner.write_all(b"\n")?;
        } else {
            for chunk in record.seq.chunks(self.line_width) {
                self.inner.write_all(chunk)?;
                self.inner.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
