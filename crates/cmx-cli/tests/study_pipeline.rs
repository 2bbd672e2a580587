//! End-to-end pipeline runs over a synthetic study export.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use cmx_cli::commands::run_study;
use cmx_ingest::{META_WIDTH, SEQUENCE_WIDTH};

fn study_csv(sequences: &[Vec<&str>]) -> String {
    let mut out = String::from("X");
    for i in 2..=META_WIDTH {
        write!(out, ";m{i}").unwrap();
    }
    for i in 1..=SEQUENCE_WIDTH {
        write!(out, ";s{i}").unwrap();
    }
    out.push('\n');
    for (idx, seq) in sequences.iter().enumerate() {
        write!(out, "{}", idx + 1).unwrap();
        for i in 2..=META_WIDTH {
            write!(out, ";m{i}v{}", idx + 1).unwrap();
        }
        for i in 0..SEQUENCE_WIDTH {
            let cell = seq.get(i).copied().unwrap_or("NA");
            write!(out, ";{cell}").unwrap();
        }
        out.push('\n');
    }
    out
}

fn write_study(dir: &Path, contents: &str) -> (PathBuf, PathBuf) {
    let input = dir.join("Study_1.csv");
    fs::write(&input, contents).expect("write study csv");
    let proc_dir = dir.join("proc");
    fs::create_dir_all(&proc_dir).expect("create proc dir");
    (input, proc_dir.join("study1.tsv"))
}

fn alternating(len: usize) -> Vec<&'static str> {
    (0..len).map(|i| if i % 2 == 0 { "1" } else { "0" }).collect()
}

#[test]
fn augments_and_writes_the_study_table() {
    let dir = tempfile::tempdir().unwrap();
    let contents = study_csv(&[alternating(16), vec!["0"; 9]]);
    let (input, output) = write_study(dir.path(), &contents);

    let summary = run_study(&input, &output).expect("pipeline run");
    assert_eq!(summary.rows, 2);
    // 16 - 8 windows for the first row, 9 - 8 for the second
    assert_eq!(summary.windows, 9);

    let written = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);

    let mut expected_header = String::from("idx");
    for i in 2..=META_WIDTH {
        write!(expected_header, "\tm{i}").unwrap();
    }
    expected_header.push_str("\tcmx\tcmx_w\tcmx_r");
    assert_eq!(lines[0], expected_header);

    let first: Vec<&str> = lines[1].split('\t').collect();
    assert_eq!(first.len(), META_WIDTH + 3);
    assert_eq!(first[0], "1");
    // 8 windows -> 7 separators in each series cell
    assert_eq!(first[META_WIDTH + 1].matches(';').count(), 7);
    assert_eq!(first[META_WIDTH + 2].matches(';').count(), 7);

    let second: Vec<&str> = lines[2].split('\t').collect();
    // one window: a single number, no separator
    assert_eq!(second[META_WIDTH + 1].matches(';').count(), 0);
    assert!(second[META_WIDTH + 1].parse::<f64>().is_ok());
    assert!(second[META_WIDTH + 2].parse::<f64>().is_ok());
}

#[test]
fn repeated_runs_produce_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let contents = study_csv(&[alternating(30), vec!["0"; 12]]);
    let (input, output) = write_study(dir.path(), &contents);

    run_study(&input, &output).expect("first run");
    let first = fs::read(&output).expect("read first output");
    run_study(&input, &output).expect("second run");
    let second = fs::read(&output).expect("read second output");
    assert_eq!(first, second);
}

#[test]
fn missing_output_directory_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let contents = study_csv(&[alternating(16)]);
    let input = dir.path().join("Study_1.csv");
    fs::write(&input, &contents).unwrap();
    let output = dir.path().join("proc").join("study1.tsv");

    let result = run_study(&input, &output);
    assert!(result.is_err());
}

#[test]
fn fully_missing_sequence_aborts_the_run() {
    // An empty sequence reaches the whole-sequence estimator, which
    // treats it as an error; the run fails rather than writing output.
    let dir = tempfile::tempdir().unwrap();
    let contents = study_csv(&[vec![]]);
    let (input, output) = write_study(dir.path(), &contents);

    let result = run_study(&input, &output);
    assert!(result.is_err());
    assert!(!output.exists());
}
