//! Property tests for the partitioning engine
//!
//! Generated record sets are written out, parsed back and partitioned; the
//! two outputs must cover the input exactly once, split by set membership.

use proptest::prelude::*;
use seqfilter_common::SeqFormat;
use seqfilter_core::io::{RecordSink, SeqReader, SeqWriter};
use seqfilter_core::{partition, FilterOptions, IdSet, SequenceRecord};

fn record_strategy() -> impl Strategy<Value = (String, Vec<u8>)> {
    (
        "[A-Za-z0-9_.|-]{1,12}",
        proptest::collection::vec(prop::sample::select(b"ACGTN".to_vec()), 0..80),
    )
}

fn encode(records: &[(String, Vec<u8>)], format: SeqFormat) -> Vec<u8> {
    let mut writer = SeqWriter::new(format, Vec::new(), 7);
    for (id, seq) in records {
        let qual = (format == SeqFormat::Fastq).then(|| vec![b'I'; seq.len()]);
        let record = SequenceRecord::from_title(id.as_str(), seq.clone(), qual);
        writer.write_record(&record).unwrap();
    }
    writer.finish().unwrap();
    writer.into_inner()
}

fn decode(bytes: &[u8], format: SeqFormat) -> Vec<SequenceRecord> {
    SeqReader::new(format, bytes).collect::<Result<_, _>>().unwrap()
}

fn check_partition(records: Vec<(String, Vec<u8>)>, picked: Vec<bool>, format: SeqFormat) {
    let ids: IdSet = records
        .iter()
        .zip(picked.iter().cycle())
        .filter(|&(_, &pick)| pick)
        .map(|((id, _), _)| id.clone())
        .collect();

    let input = encode(&records, format);
    let mut positive = SeqWriter::new(format, Vec::new(), 0);
    let mut negative = SeqWriter::new(format, Vec::new(), 0);

    let stats = partition(
        SeqReader::new(format, input.as_slice()),
        &ids,
        Some(&mut positive),
        Some(&mut negative),
        &FilterOptions::default(),
        |_| {},
    )
    .unwrap();

    let positive = decode(&positive.into_inner(), format);
    let negative = decode(&negative.into_inner(), format);
    let original = decode(&input, format);

    assert_eq!(stats.records as usize, original.len());
    assert_eq!(positive.len() + negative.len(), original.len());
    assert!(positive.iter().all(|r| ids.contains(&r.id)));
    assert!(negative.iter().all(|r| !ids.contains(&r.id)));

    // Each output keeps input order, so merging by membership rebuilds the input
    let mut pos = positive.into_iter();
    let mut neg = negative.into_iter();
    for record in &original {
        let next = if ids.contains(&record.id) { pos.next() } else { neg.next() };
        assert_eq!(next.as_ref(), Some(record));
    }
}

proptest! {
    #[test]
    fn fasta_partition_is_exact(
        records in proptest::collection::vec(record_strategy(), 0..40),
        picked in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        check_partition(records, picked, SeqFormat::Fasta);
    }

    #[test]
    fn fastq_partition_is_exact(
        records in proptest::collection::vec(record_strategy(), 0..40),
        picked in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        check_partition(records, picked, SeqFormat::Fastq);
    }
}
