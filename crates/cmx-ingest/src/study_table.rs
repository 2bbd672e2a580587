//! Reading and validating the study export.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, NullValues, SerReader};
use tracing::debug;

use crate::error::IngestError;

/// Field separator of the source export.
pub const SOURCE_SEPARATOR: u8 = b';';

/// Name the exporter gave the row-index column.
pub const SOURCE_INDEX_COLUMN: &str = "X";

/// Name the pipeline uses for the row-index column.
pub const INDEX_COLUMN: &str = "idx";

/// Number of leading metadata columns (index column included).
pub const META_WIDTH: usize = 8;

/// Number of sequence columns following the metadata block.
pub const SEQUENCE_WIDTH: usize = 313;

/// Minimum number of columns a valid study export carries.
pub const EXPECTED_WIDTH: usize = META_WIDTH + SEQUENCE_WIDTH;

/// Reads the semicolon-delimited study export, validates its layout, and
/// renames the index column.
///
/// Empty cells and the exporter's `NA`/`NaN` markers parse as nulls.
///
/// # Errors
///
/// [`IngestError::FileNotFound`] when the path does not exist,
/// [`IngestError::CsvParse`] on malformed input,
/// [`IngestError::MissingIndexColumn`] /
/// [`IngestError::TooFewColumns`] when the layout check fails.
pub fn read_study_csv(path: &Path) -> Result<DataFrame, IngestError> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let null_markers: Vec<_> = ["", "NA", "NaN"].iter().map(|m| (*m).into()).collect();
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|opts| {
            opts.with_separator(SOURCE_SEPARATOR)
                .with_null_values(Some(NullValues::AllColumns(null_markers.clone())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_layout(&df, path)?;

    df.rename(SOURCE_INDEX_COLUMN, INDEX_COLUMN.into())
        .map_err(|e| IngestError::DataFrame {
            message: e.to_string(),
        })?;
    debug!(
        rows = df.height(),
        columns = df.width(),
        "study table loaded"
    );
    Ok(df)
}

/// Fails fast when the export does not match the fixed study layout:
/// the index column must lead and the metadata plus sequence blocks must
/// both be present in full.
fn validate_layout(df: &DataFrame, path: &Path) -> Result<(), IngestError> {
    let found = df.width();
    if found < EXPECTED_WIDTH {
        return Err(IngestError::TooFewColumns {
            path: path.to_path_buf(),
            expected: EXPECTED_WIDTH,
            found,
        });
    }
    let first = df
        .get_column_names()
        .first()
        .map(|name| name.to_string())
        .unwrap_or_default();
    if first != SOURCE_INDEX_COLUMN {
        return Err(IngestError::MissingIndexColumn {
            path: path.to_path_buf(),
            expected: SOURCE_INDEX_COLUMN.to_string(),
            found: first,
        });
    }
    Ok(())
}

/// Splits a validated study table into its metadata block (first
/// [`META_WIDTH`] columns) and sequence block (the following
/// [`SEQUENCE_WIDTH`] columns).
///
/// # Errors
///
/// [`IngestError::DataFrame`] when the frame is narrower than the study
/// layout or the split frames cannot be assembled.
pub fn split_blocks(df: &DataFrame) -> Result<(DataFrame, DataFrame), IngestError> {
    let columns = df.get_columns();
    if columns.len() < EXPECTED_WIDTH {
        return Err(IngestError::DataFrame {
            message: format!(
                "cannot split {} columns into {META_WIDTH} metadata + {SEQUENCE_WIDTH} sequence",
                columns.len()
            ),
        });
    }
    let meta = DataFrame::new(columns[..META_WIDTH].to_vec()).map_err(|e| {
        IngestError::DataFrame {
            message: e.to_string(),
        }
    })?;
    let sequences = DataFrame::new(columns[META_WIDTH..EXPECTED_WIDTH].to_vec()).map_err(|e| {
        IngestError::DataFrame {
            message: e.to_string(),
        }
    })?;
    Ok((meta, sequences))
}
