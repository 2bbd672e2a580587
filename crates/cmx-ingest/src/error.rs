//! Error types for study data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading and validating the study table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Study CSV file not found.
    #[error("study file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The index column is absent or not in the leading position.
    #[error("expected first column '{expected}' in {path}, found '{found}'")]
    MissingIndexColumn {
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// The table is narrower than the fixed study layout.
    #[error("expected at least {expected} columns in {path}, found {found}")]
    TooFewColumns {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}
