//! Windowed complexity and derived-column assembly.

use cmx_bdm::{Bdm, BdmError};
use cmx_common::format_numeric;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use crate::error::TransformError;

/// Sliding-window length used for the local complexity profile.
pub const WINDOW_LEN: usize = 8;

/// Whole-sequence normalized complexity.
pub const COMPLEXITY_COLUMN: &str = "cmx";

/// Normalized windowed complexity series.
pub const WINDOWED_COLUMN: &str = "cmx_w";

/// Raw windowed complexity series.
pub const WINDOWED_RAW_COLUMN: &str = "cmx_r";

/// Scores every `window`-length slice of `seq`, start positions
/// `0..len - window`.
///
/// The window covering the final `window` symbols is deliberately not
/// produced; a sequence of length `window` therefore yields no windows at
/// all, and the result length is always `max(0, len - window)`.
///
/// # Errors
///
/// Propagates [`BdmError`] from the estimator (out-of-alphabet symbols).
pub fn window_scores(
    bdm: &Bdm,
    seq: &[i64],
    window: usize,
    normalized: bool,
) -> Result<Vec<f64>, BdmError> {
    (0..seq.len().saturating_sub(window))
        .map(|start| bdm.score(&seq[start..start + window], normalized))
        .collect()
}

/// Serializes a score series into the single-cell `;`-joined convention
/// of the output table. An empty series becomes an empty string.
pub fn join_scores(scores: &[f64]) -> String {
    scores
        .iter()
        .map(|score| format_numeric(*score))
        .collect::<Vec<_>>()
        .join(";")
}

/// Appends the three derived columns to the metadata table, in fixed
/// order: whole-sequence normalized complexity ([`COMPLEXITY_COLUMN`]),
/// normalized window series ([`WINDOWED_COLUMN`]), raw window series
/// ([`WINDOWED_RAW_COLUMN`]).
///
/// `sequences` must be row-aligned with `meta`; both estimators are
/// constructed by the caller and reused across every row.
///
/// # Errors
///
/// [`TransformError::RowCountMismatch`] when the blocks have diverged,
/// [`TransformError::Estimator`] on estimator failures (empty sequence,
/// out-of-alphabet symbol).
pub fn augment_with_complexity(
    meta: &mut DataFrame,
    sequences: &[Vec<i64>],
    whole: &Bdm,
    windowed: &Bdm,
) -> Result<(), TransformError> {
    if meta.height() != sequences.len() {
        return Err(TransformError::RowCountMismatch {
            meta_rows: meta.height(),
            sequence_rows: sequences.len(),
        });
    }

    let mut whole_scores = Vec::with_capacity(sequences.len());
    let mut windowed_norm = Vec::with_capacity(sequences.len());
    let mut windowed_raw = Vec::with_capacity(sequences.len());
    let mut window_count = 0usize;
    for seq in sequences {
        whole_scores.push(whole.score(seq, true)?);
        let norm = window_scores(windowed, seq, WINDOW_LEN, true)?;
        let raw = window_scores(windowed, seq, WINDOW_LEN, false)?;
        window_count += norm.len();
        windowed_norm.push(join_scores(&norm));
        windowed_raw.push(join_scores(&raw));
    }
    debug!(
        rows = sequences.len(),
        windows = window_count,
        "complexity columns computed"
    );

    set_column(meta, Series::new(COMPLEXITY_COLUMN.into(), whole_scores))?;
    set_column(meta, Series::new(WINDOWED_COLUMN.into(), windowed_norm))?;
    set_column(meta, Series::new(WINDOWED_RAW_COLUMN.into(), windowed_raw))?;
    Ok(())
}

fn set_column(df: &mut DataFrame, series: Series) -> Result<(), TransformError> {
    df.with_column(series)
        .map_err(|e| TransformError::DataFrame {
            message: e.to_string(),
        })?;
    Ok(())
}
