//! Pipeline orchestration with explicit stages.
//!
//! The run follows these stages in order:
//! 1. **Ingest**: read and validate the study export
//! 2. **Normalize**: densify each sequence row
//! 3. **Score**: whole-sequence and windowed complexity
//! 4. **Write**: serialize the augmented table

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use polars::prelude::AnyValue;
use tracing::{info, info_span};

use cmx_bdm::Bdm;
use cmx_common::any_to_f64;
use cmx_ingest::{normalize_sequences, read_study_csv, split_blocks};
use cmx_output::write_tsv;
use cmx_transform::{COMPLEXITY_COLUMN, WINDOW_LEN, augment_with_complexity};

/// Result of a completed pipeline run, consumed by the summary printer.
#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub windows: usize,
    pub mean_complexity: Option<f64>,
    pub elapsed: Duration,
}

/// Runs the whole pipeline: ingest, normalize, score, write.
pub fn run_study(input: &Path, output: &Path) -> Result<RunSummary> {
    let started = Instant::now();
    let study_span = info_span!("study", input = %input.display());
    let _study_guard = study_span.enter();

    let df = {
        let _span = info_span!("ingest").entered();
        read_study_csv(input).context("read study export")?
    };
    let (mut meta, sequence_block) = split_blocks(&df).context("split study blocks")?;

    let sequences = {
        let _span = info_span!("normalize").entered();
        normalize_sequences(&sequence_block)
    };
    info!(rows = sequences.len(), "sequences normalized");

    // Both estimator configurations are built once and reused row by row.
    let whole = Bdm::general();
    let windowed = Bdm::with_block_len(WINDOW_LEN).context("construct window estimator")?;
    {
        let _span = info_span!("score").entered();
        augment_with_complexity(&mut meta, &sequences, &whole, &windowed)
            .context("compute complexity columns")?;
    }

    {
        let _span = info_span!("write").entered();
        write_tsv(&mut meta, output).context("write processed table")?;
    }
    info!(output = %output.display(), "processed table written");

    let windows = sequences
        .iter()
        .map(|seq| seq.len().saturating_sub(WINDOW_LEN))
        .sum();
    Ok(RunSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rows: meta.height(),
        windows,
        mean_complexity: mean_complexity(&meta),
        elapsed: started.elapsed(),
    })
}

fn mean_complexity(meta: &polars::prelude::DataFrame) -> Option<f64> {
    let column = meta.column(COMPLEXITY_COLUMN).ok()?;
    let mut sum = 0.0;
    let mut count = 0usize;
    for idx in 0..meta.height() {
        if let Some(value) = any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)) {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}
