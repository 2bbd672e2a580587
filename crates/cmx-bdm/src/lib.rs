//! Block Decomposition Method (BDM) complexity estimation for binary
//! sequences.
//!
//! BDM approximates the algorithmic (Kolmogorov) complexity of a finite
//! sequence by cutting it into fixed-length blocks, looking up a
//! precomputed complexity value for each distinct block, and charging
//! `log2(multiplicity)` for repetitions:
//!
//! ```text
//! bdm(s) = sum over distinct blocks b of ( ctm(b) + log2(count(b)) )
//! ```
//!
//! Leftover symbols that do not fill a complete block are ignored. A
//! normalized variant rescales the raw score between the least complex
//! (constant) and most complex (maximally diverse) arrangement with the
//! same block count, making scores comparable across sequence lengths.
//!
//! Two configurations are used by the pipeline: the general estimator
//! ([`Bdm::general`], block length 12) for whole-sequence scores, and a
//! fixed-shape estimator ([`Bdm::with_block_len`] with length 8) for
//! sliding windows.

pub mod ctm;
mod error;
mod estimator;

pub use ctm::CtmTable;
pub use error::BdmError;
pub use estimator::{Bdm, GENERAL_BLOCK_LEN, MAX_BLOCK_LEN};
