//! Sequence record model shared by the FASTA and FASTQ streams

/// One FASTA or FASTQ record
///
/// `title` holds the title line exactly as read, without its `>` / `@`
/// marker and line ending, and is written back unchanged. The identifier is
/// the first whitespace-delimited word of it; everything after is the
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub title: Vec<u8>,
    pub seq: Vec<u8>,
    /// Quality string, present for FASTQ records only
    pub qual: Option<Vec<u8>>,
}

impl SequenceRecord {
    /// Build a record from a title line without its `>` / `@` marker
    pub fn from_title(title: impl Into<Vec<u8>>, seq: Vec<u8>, qual: Option<Vec<u8>>) -> Self {
        let title = title.into();
        let id = String::from_utf8_lossy(first_word(&title)).into_owned();

        Self { id, title, seq, qual }
    }

    /// Title text after the identifier, with the separating whitespace removed
    pub fn description(&self) -> &[u8] {
        let start = self.title.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(0);
        let rest = &self.title[start..];
        let end = rest.iter().position(u8::is_ascii_whitespace).unwrap_or(rest.len());
        rest[end..].trim_ascii()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

fn first_word(title: &[u8]) -> &[u8] {
    title
        .split(u8::is_ascii_whitespace)
        .find(|word| !word.is_empty())
        .unwrap_or_default()
}

/// Strip a trailing `/1` or `/2` read-pair suffix from an identifier
pub fn strip_pair_suffix(id: &str) -> &str {
    id.strip_suffix("/1")
        .or_else(|| id.strip_suffix("/2"))
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_title_splits_id_and_description() {
        let record = SequenceRecord::from_title("seq1 some protein\tlength=4", b"ACGT".to_vec(), None);
        assert_eq!(record.id, "seq1");
        assert_eq!(record.description(), b"some protein\tlength=4");
        assert_eq!(record.title, b"seq1 some protein\tlength=4");
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_from_title_keeps_raw_title() {
        let record = SequenceRecord::from_title("  seq2\t\tdesc  ", Vec::new(), None);
        assert_eq!(record.id, "seq2");
        assert_eq!(record.description(), b"desc");
        assert_eq!(record.title, b"  seq2\t\tdesc  ");
        assert!(record.is_empty());
    }

    #[test]
    fn test_from_title_non_utf8() {
        let record = SequenceRecord::from_title(&b"seq1 caf\xe9"[..], b"A".to_vec(), None);
        assert_eq!(record.id, "seq1");
        assert_eq!(record.title, b"seq1 caf\xe9");
        assert_eq!(record.description(), b"caf\xe9");
    }

    #[test]
    fn test_from_title_empty() {
        let record = SequenceRecord::from_title("", Vec::new(), None);
        assert_eq!(record.id, "");
        assert_eq!(record.description(), b"");
    }

    #[test]
    fn test_strip_pair_suffix() {
        assert_eq!(strip_pair_suffix("read7/1"), "read7");
        assert_eq!(strip_pair_suffix("read7/2"), "read7");
        assert_eq!(strip_pair_suffix("read7/3"), "read7");
        assert_eq!(strip_pair_suffix("read7"), "read7");
    }
}
