//! Streaming sequence I/O
//!
//! Record-at-a-time readers and writers for FASTA and FASTQ, plus helpers for
//! opening (optionally gzip-compressed) inputs and buffered outputs.
//!
//! # Example
//!
//! ```
//! use seqfilter_common::SeqFormat;
//! use seqfilter_core::io::{RecordSink, SeqReader, SeqWriter};
//!
//! let input: &[u8] = b">seq1\nACGT\n>seq2\nGG\n";
//! let mut writer = SeqWriter::new(SeqFormat::Fasta, Vec::new(), 0);
//! for record in SeqReader::new(SeqFormat::Fasta, input) {
//!     writer.write_record(&record.unwrap()).unwrap();
//! }
//! writer.finish().unwrap();
//! assert_eq!(writer.into_inner(), input);
//! ```

pub mod fasta;
pub mod fastq;

pub use fasta::{FastaReader, FastaWriter};
pub use fastq::{FastqReader, FastqWriter};

use crate::record::SequenceRecord;
use flate2::read::MultiGzDecoder;
use seqfilter_common::{FilterError, Result, SeqFormat};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Open an input file for line-oriented reading
///
/// `-` reads standard input. Gzip input is detected from its magic bytes and
/// decompressed on the fly.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(std::io::stdin())));
    }

    let file = File::open(path).map_err(|source| FilterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    if reader.fill_buf()?.starts_with(&GZIP_MAGIC) {
        debug!(path = %path.display(), "Reading gzip-compressed input");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Create (or truncate) an output file behind a buffered writer
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| FilterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Destination for filtered records
pub trait RecordSink {
    fn write_record(&mut self, record: &SequenceRecord) -> Result<()>;

    /// Flush buffered output; called once after the last record
    fn finish(&mut self) -> Result<()>;
}

/// Reader over either supported format
pub enum SeqReader<R: BufRead> {
    Fasta(FastaReader<R>),
    Fastq(FastqReader<R>),
}

impl<R: BufRead> SeqReader<R> {
    pub fn new(format: SeqFormat, reader: R) -> Self {
        match format {
            SeqFormat::Fasta => SeqReader::Fasta(FastaReader::new(reader)),
            SeqFormat::Fastq => SeqReader::Fastq(FastqReader::new(reader)),
        }
    }
}

impl<R: BufRead> Iterator for SeqReader<R> {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SeqReader::Fasta(reader) => reader.next(),
            SeqReader::Fastq(reader) => reader.next(),
        }
    }
}

/// Writer for either supported format
pub enum SeqWriter<W: Write> {
    Fasta(FastaWriter<W>),
    Fastq(FastqWriter<W>),
}

impl<W: Write> SeqWriter<W> {
    /// `line_width` wraps FASTA sequence lines; 0 keeps each on one line
    pub fn new(format: SeqFormat, inner: W, line_width: usize) -> Self {
        match format {
            SeqFormat::Fasta => SeqWriter::Fasta(FastaWriter::new(inner, line_width)),
            SeqFormat::Fastq => SeqWriter::Fastq(FastqWriter::new(inner)),
        }
    }

    pub fn into_inner(self) -> W {
        match self {
            SeqWriter::Fasta(writer) => writer.into_inner(),
            SeqWriter::Fastq(writer) => writer.into_inner(),
        }
    }
}

impl<W: Write> RecordSink for SeqWriter<W> {
    fn write_record(&mut self, record: &SequenceRecord) -> Result<()> {
        match self {
            SeqWriter::Fasta(writer) => writer.write_record(record),
            SeqWriter::Fastq(writer) => writer.write_record(record),
        }
    }

    fn finish(&mut self) -> Result<()> {
        match self {
            SeqWriter::Fasta(writer) => writer.flush(),
            SeqWriter::Fastq(writer) => writer.flush(),
        }
    }
}

/// Read one line into `buf`, returning false at end of input
pub(crate) fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    Ok(reader.read_until(b'\n', buf)? > 0)
}

/// Line content without the trailing `\n` / `\r\n`
pub(crate) fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

pub(crate) fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}
