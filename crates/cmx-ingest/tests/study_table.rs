use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use cmx_ingest::{
    EXPECTED_WIDTH, INDEX_COLUMN, IngestError, META_WIDTH, SEQUENCE_WIDTH, normalize_sequences,
    read_study_csv, split_blocks,
};

/// Builds a full-width study export: index + 7 metadata columns + 313
/// sequence columns, missing tail positions padded with `NA`.
fn study_csv(index_name: &str, sequences: &[Vec<&str>]) -> String {
    let mut out = String::from(index_name);
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

fn write_temp(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("Study_1.csv");
    fs::write(&path, contents).expect("write study csv");
    (dir, path)
}

#[test]
fn loads_renames_and_splits_the_study_table() {
    let contents = study_csv(
        "X",
        &[
            vec!["1", "0", "1", "1", "0", "1", "0", "1", "0", "0"],
            vec!["0", "0", "0"],
        ],
    );
    let (_dir, path) = write_temp(&contents);

    let df = read_study_csv(&path).expect("read study csv");
    assert_eq!(df.width(), EXPECTED_WIDTH);
    assert_eq!(df.height(), 2);
    assert_eq!(df.get_column_names()[0].as_str(), INDEX_COLUMN);

    let (meta, sequences) = split_blocks(&df).expect("split blocks");
    assert_eq!(meta.width(), META_WIDTH);
    assert_eq!(sequences.width(), SEQUENCE_WIDTH);
    assert_eq!(meta.height(), sequences.height());

    let rows = normalize_sequences(&sequences);
    assert_eq!(rows[0], vec![1, 0, 1, 1, 0, 1, 0, 1, 0, 0]);
    assert_eq!(rows[1], vec![0, 0, 0]);
}

#[test]
fn fully_missing_sequence_row_normalizes_to_empty() {
    let contents = study_csv("X", &[vec![]]);
    let (_dir, path) = write_temp(&contents);

    let df = read_study_csv(&path).expect("read study csv");
    let (_meta, sequences) = split_blocks(&df).expect("split blocks");
    let rows = normalize_sequences(&sequences);
    assert_eq!(rows, vec![Vec::<i64>::new()]);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.csv");
    assert!(matches!(
        read_study_csv(&path),
        Err(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn narrow_table_fails_the_layout_check() {
    let (_dir, path) = write_temp("X;a;b\n1;2;3\n");
    match read_study_csv(&path) {
        Err(IngestError::TooFewColumns {
            expected, found, ..
        }) => {
            assert_eq!(expected, EXPECTED_WIDTH);
            assert_eq!(found, 3);
        }
        other => panic!("expected TooFewColumns, got {other:?}"),
    }
}

#[test]
fn misnamed_index_column_fails_the_layout_check() {
    let contents = study_csv("Y", &[vec!["1"]]);
    let (_dir, path) = write_temp(&contents);
    match read_study_csv(&path) {
        Err(IngestError::MissingIndexColumn {
            expected, found, ..
        }) => {
            assert_eq!(expected, "X");
            assert_eq!(found, "Y");
        }
        other => panic!("expected MissingIndexColumn, got {other:?}"),
    }
}
