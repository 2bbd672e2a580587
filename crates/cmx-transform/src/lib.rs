//! Complexity transformation: whole-sequence scores, sliding-window
//! profiles, and assembly of the derived columns onto the metadata table.

mod complexity;
mod error;

pub use complexity::{
    COMPLEXITY_COLUMN, WINDOW_LEN, WINDOWED_COLUMN, WINDOWED_RAW_COLUMN, augment_with_complexity,
    join_scores, window_scores,
};
pub use error::TransformError;
