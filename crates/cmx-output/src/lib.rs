//! Output serialization for the augmented study table.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use thiserror::Error;

/// Field separator of the processed output.
pub const OUTPUT_SEPARATOR: u8 = b'\t';

#[derive(Debug, Error)]
pub enum OutputError {
    /// Destination could not be created. The parent directory must exist
    /// beforehand; it is not created here.
    #[error("failed to create output file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization failed mid-write.
    #[error("failed to write output file {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Writes the table as tab-delimited text with a header row and no index
/// column.
///
/// # Errors
///
/// [`OutputError::Create`] when the file cannot be created (typically a
/// missing destination directory), [`OutputError::Write`] on
/// serialization failures.
pub fn write_tsv(df: &mut DataFrame, path: &Path) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(file)
        .with_separator(OUTPUT_SEPARATOR)
        .include_header(true)
        .finish(df)
        .map_err(|e| OutputError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn sample_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("idx".into(), [1i64, 2]).into(),
            Series::new("cmx".into(), [0.25f64, 0.5]).into(),
            Series::new("cmx_w".into(), ["1;2", ""]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn writes_tab_delimited_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("study1.tsv");
        let mut df = sample_frame();
        write_tsv(&mut df, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("idx\tcmx\tcmx_w"));
        let first = lines.next().unwrap();
        assert!(first.starts_with("1\t"));
        assert_eq!(first.matches('\t').count(), 2);
    }

    #[test]
    fn missing_destination_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proc").join("study1.tsv");
        let mut df = sample_frame();
        assert!(matches!(
            write_tsv(&mut df, &path),
            Err(OutputError::Create { .. })
        ));
    }
}
