//! Sequence normalization.

use cmx_common::any_to_f64;
use polars::prelude::{AnyValue, DataFrame};

/// Turns each row of the sequence block into a dense integer sequence.
///
/// Cells are walked in column order; nulls and NaNs (the missing-value
/// padding at the tail of shorter sequences) are dropped, everything else
/// is truncated toward zero. Relative order is preserved. A fully missing
/// row yields an empty sequence.
pub fn normalize_sequences(sequence_block: &DataFrame) -> Vec<Vec<i64>> {
    let columns = sequence_block.get_columns();
    let height = sequence_block.height();
    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let mut sequence = Vec::new();
        for column in columns {
            let value = column.get(row).unwrap_or(AnyValue::Null);
            if let Some(number) = any_to_f64(value) {
                if number.is_nan() {
                    continue;
                }
                sequence.push(number as i64);
            }
        }
        rows.push(sequence);
    }
    rows
}
