use cmx_bdm::BdmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("complexity estimation failed: {0}")]
    Estimator(#[from] BdmError),

    #[error("metadata has {meta_rows} rows but {sequence_rows} sequences were provided")]
    RowCountMismatch {
        meta_rows: usize,
        sequence_rows: usize,
    },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}
