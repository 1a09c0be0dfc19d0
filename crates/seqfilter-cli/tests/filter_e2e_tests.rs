//! End-to-end tests for the seqfilter binary
//!
//! These tests run the compiled binary against temporary files and cover:
//! - Positive/negative splitting for FASTA and FASTQ
//! - Single-output runs
//! - JSON summaries
//! - Fatal errors and exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FASTA: &str = ">seq1\nAAAA\n>seq2 second\nCCCC\n>seq3\nGGGG\n>seq4\nTTTT\n";
const FASTQ: &str = "@r1\nACGT\n+\nIIII\n@r2\nAC\n+\n##\n@r3\nG\n+\n!\n";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }
}

fn seqfilter() -> Command {
    let mut cmd = Command::cargo_bin("seqfilter").unwrap();
    cmd.env_remove("SEQFILTER_CONFIG")
        .env("SEQFILTER_PROGRESS", "false")
        .env("LOG_LEVEL", "warn");
    cmd
}

// ============================================================================
// Splitting
// ============================================================================

#[test]
fn test_fasta_split_both_outputs() {
    let fx = Fixture::new();
    let input = fx.file("in.fasta", FASTA);
    let table = fx.file("ids.tsv", "seq2\thit\nseq4\thit\n");

    seqfilter()
        .arg("-i")
        .arg(&input)
        .arg("-t")
        .arg(&table)
        .args(["-c", "1"])
        .arg("-p")
        .arg(fx.path("pos.fasta"))
        .arg("-n")
        .arg(fx.path("neg.fasta"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered 4 fasta record(s) against 2 identifier(s)"));

    assert_eq!(fx.read("pos.fasta"), ">seq2 second\nCCCC\n>seq4\nTTTT\n");
    assert_eq!(fx.read("neg.fasta"), ">seq1\nAAAA\n>seq3\nGGGG\n");
}

#[test]
fn test_fastq_split_second_column() {
    let fx = Fixture::new();
    let input = fx.file("reads.dat", FASTQ);
    let table = fx.file("hits.tabular", "#query\tread\nq1\tr3\nq2\tr1\n");

    seqfilter()
        .arg("--input")
        .arg(&input)
        .args(["--format", "fastqsanger"])
        .arg("--table")
        .arg(&table)
        .args(["--columns", "2"])
        .arg("--positive")
        .arg(fx.path("pos.fastq"))
        .arg("--negative")
        .arg(fx.path("neg.fastq"))
        .assert()
        .success();

    assert_eq!(fx.read("pos.fastq"), "@r1\nACGT\n+\nIIII\n@r3\nG\n+\n!\n");
    assert_eq!(fx.read("neg.fastq"), "@r2\nAC\n+\n##\n");
}

#[test]
fn test_negative_only() {
    let fx = Fixture::new();
    let input = fx.file("in.fasta", FASTA);

    seqfilter()
        .arg("-i")
        .arg(&input)
        .args(["--id-list", "seq1,seq3"])
        .arg("-n")
        .arg(fx.path("neg.fasta"))
        .assert()
        .success()
        .stdout(predicate::str::contains("(not written)"));

    assert_eq!(fx.read("neg.fasta"), ">seq2 second\nCCCC\n>seq4\nTTTT\n");
    assert!(!fx.path("pos.fasta").exists());
}

#[test]
fn test_empty_input() {
    let fx = Fixture::new();
    let input = fx.file("empty.fasta", "");
    let table = fx.file("ids.tsv", "seq1\n");

    seqfilter()
        .arg("-i")
        .arg(&input)
        .arg("-t")
        .arg(&table)
        .args(["-c", "1"])
        .arg("-p")
        .arg(fx.path("pos.fasta"))
        .arg("-n")
        .arg(fx.path("neg.fasta"))
        .assert()
        .success();

    assert_eq!(fx.read("pos.fasta"), "");
    assert_eq!(fx.read("neg.fasta"), "");
}

#[test]
fn test_json_summary() {
    let fx = Fixture::new();
    let input = fx.file("in.fa", FASTA);

    let output = seqfilter()
        .arg("-i")
        .arg(&input)
        .args(["--id-list", "seq4", "--json"])
        .arg("-p")
        .arg(fx.path("pos.fa"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["records"], 4);
    assert_eq!(summary["matched"], 1);
    assert_eq!(summary["unmatched"], 3);
    assert_eq!(summary["format"], "fasta");
}

#[test]
fn test_config_file_line_width() {
    let fx = Fixture::new();
    let input = fx.file("in.fasta", FASTA);
    let config = fx.file("seqfilter.toml", "line_width = 3\n");

    seqfilter()
        .arg("-i")
        .arg(&input)
        .args(["--id-list", "seq1", "--quiet"])
        .arg("--config")
        .arg(&config)
        .arg("-p")
        .arg(fx.path("pos.fasta"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fx.read("pos.fasta"), ">seq1\nAAA\nA\n");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_no_outputs_fails() {
    let fx = Fixture::new();
    let input = fx.file("in.fasta", FASTA);

    seqfilter()
        .arg("-i")
        .arg(&input)
        .args(["--id-list", "seq1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No output requested"));
}

#[test]
fn test_column_out_of_range_fails() {
    let fx = Fixture::new();
    let input = fx.file("in.fasta", FASTA);
    let table = fx.file("ids.tsv", "seq1\n");

    seqfilter()
        .arg("-i")
        .arg(&input)
        .arg("-t")
        .arg(&table)
        .args(["-c", "3"])
        .arg("-p")
        .arg(fx.path("pos.fasta"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Column 3 requested but line 1"));
}

#[test]
fn test_malformed_fasta_fails() {
    let fx = Fixture::new();
    let input = fx.file("in.fasta", "not a fasta file\n");

    seqfilter()
        .arg("-i")
        .arg(&input)
        .args(["--id-list", "seq1"])
        .arg("-p")
        .arg(fx.path("pos.fasta"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed FASTA record at line 1"));
}

#[test]
fn test_missing_input_fails() {
    let fx = Fixture::new();

    seqfilter()
        .arg("-i")
        .arg(fx.path("missing.fasta"))
        .args(["--id-list", "seq1"])
        .arg("-p")
        .arg(fx.path("pos.fasta"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.fasta"));
}

#[test]
fn test_unknown_format_fails() {
    let fx = Fixture::new();
    let input = fx.file("reads.txt", FASTA);

    seqfilter()
        .arg("-i")
        .arg(&input)
        .args(["--id-list", "seq1"])
        .arg("-p")
        .arg(fx.path("pos.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot infer format"));
}

#[test]
fn test_columns_without_table_fails() {
    let fx = Fixture::new();
    let input = fx.file("in.fasta", FASTA);

    seqfilter()
        .arg("-i")
        .arg(&input)
        .args(["-c", "1", "--id-list", "seq1"])
        .arg("-p")
        .arg(fx.path("pos.fasta"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pass one --columns per --table"));
}

#[test]
fn test_missing_input_argument_is_usage_error() {
    seqfilter().args(["-p", "out.fasta"]).assert().failure().code(2);
}
