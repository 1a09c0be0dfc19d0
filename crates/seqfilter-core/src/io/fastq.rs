//! FASTQ streaming reader and writer
//!
//! Records use the four-line layout: `@title`, sequence, `+` (optionally
//! repeating the title), quality. Blank lines between records are skipped.

use super::{is_blank, read_line, trim_line_end};
use crate::record::SequenceRecord;
use seqfilter_common::{FilterError, Result};
use std::io::{BufRead, Write};

/// Record-at-a-time FASTQ parser with reusable line buffers
pub struct FastqReader<R: BufRead> {
    reader: R,
    header: Vec<u8>,
    seq: Vec<u8>,
    plus: Vec<u8>,
    qual: Vec<u8>,
    line_number: usize,
    failed: bool,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            header: Vec::with_capacity(256),
            seq: Vec::with_capacity(256),
            plus: Vec::with_capacity(256),
            qual: Vec::with_capacity(256),
            line_number: 0,
            failed: false,
        }
    }

    fn read_into(&mut self, which: Line) -> Result<bool> {
        let buf = match which {
            Line::Header => &mut self.header,
            Line::Seq => &mut self.seq,
            Line::Plus => &mut self.plus,
            Line::Qual => &mut self.qual,
        };
        let more = read_line(&mut self.reader, buf)?;
        if more {
            self.line_number += 1;
        }
        Ok(more)
    }

    fn truncated(&self, after: &str) -> FilterError {
        FilterError::malformed_fastq(
            self.line_number,
            format!("unexpected end of file after {}", after),
        )
    }

    fn read_record(&mut self) -> Result<Option<SequenceRecord>> {
        loop {
            if !self.read_into(Line::Header)? {
                return Ok(None);
            }
            if !is_blank(&self.header) {
                break;
            }
        }

        let header = trim_line_end(&self.header);
        if header.first() != Some(&b'@') {
            return Err(FilterError::malformed_fastq(
                self.line_number,
                "header line must start with '@'",
            ));
        }
        let title = header[1..].to_vec();

        if !self.read_into(Line::Seq)? {
            return Err(self.truncated("header"));
        }
        if !self.read_into(Line::Plus)? {
            return Err(self.truncated("sequence"));
        }

        let plus = trim_line_end(&self.plus);
        if plus.first() != Some(&b'+') {
            return Err(FilterError::malformed_fastq(
                self.line_number,
                "separator line must start with '+'",
            ));
        }
        let repeated = &plus[1..];
        if !repeated.is_empty() && repeated != title.as_slice() {
            return Err(FilterError::malformed_fastq(
                self.line_number,
                format!(
                    "separator title '{}' does not match header '{}'",
                    String::from_utf8_lossy(repeated),
                    String::from_utf8_lossy(&title)
                ),
            ));
        }

        if !self.read_into(Line::Qual)? {
            return Err(self.truncated("separator"));
        }

        let seq = trim_line_end(&self.seq).trim_ascii_end().to_vec();
        let qual = trim_line_end(&self.qual).trim_ascii_end().to_vec();
        if seq.len() != qual.len() {
            return Err(FilterError::malformed_fastq(
                self.line_number,
                format!(
                    "quality length {} differs from sequence length {}",
                    qual.len(),
                    seq.len()
                ),
            ));
        }

        Ok(Some(SequenceRecord::from_title(title, seq, Some(qual))))
    }
}

#[derive(Clone, Copy)]
enum Line {
    Header,
    Seq,
    Plus,
    Qual,
}

impl<R: BufRead> Iterator for FastqReader<R> {
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

/// FASTQ writer emitting a bare `+` separator
pub struct FastqWriter<W: Write> {
    inner: W,
}

impl<W: Write> FastqWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_record(&mut self, record: &SequenceRecord) -> Result<()> {
        let qual = record.qual.as_deref().ok_or_else(|| {
            FilterError::config(format!(
                "record '{}' has no quality scores and cannot be written as FASTQ",
                record.id
            ))
        })?;

        self.inner.write_all(b"@")?;
        self.inner.write_all(&record.title)?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(&record.seq)?;
        self.inner.write_all(b"\n+\n")?;
        self.inner.write_all(qual)?;
        self.inner.write_all(b"\n")?;
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
