//! Study data ingestion: semicolon CSV loading, schema validation, and
//! sequence normalization.
//!
//! The source table is a study export with a fixed layout: an index column
//! literally named `X`, seven further metadata columns, and 313 sequence
//! columns holding categorical symbols with missing-value padding at the
//! tail. Ingestion renames `X` to `idx`, validates the layout up front,
//! splits the metadata block from the sequence block, and turns each
//! sequence row into a dense integer sequence.

mod error;
mod normalize;
mod study_table;

pub use error::IngestError;
pub use normalize::normalize_sequences;
pub use study_table::{
    EXPECTED_WIDTH, INDEX_COLUMN, META_WIDTH, SEQUENCE_WIDTH, SOURCE_INDEX_COLUMN,
    SOURCE_SEPARATOR, read_study_csv, split_blocks,
};
