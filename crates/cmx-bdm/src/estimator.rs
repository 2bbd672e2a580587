//! The estimator proper: block partition, counting, raw and normalized
//! scores.

use std::collections::BTreeMap;

use tracing::warn;

use crate::ctm::CtmTable;
use crate::error::BdmError;

/// Block length of the general-purpose configuration.
pub const GENERAL_BLOCK_LEN: usize = 12;

/// Largest supported block length. The lookup table holds `2^len` entries,
/// so this bounds construction cost.
pub const MAX_BLOCK_LEN: usize = 16;

/// A configured BDM estimator over binary sequences.
///
/// Construction builds the per-block lookup table once; instances are
/// meant to be created up front and reused across every sequence and
/// window of a run.
#[derive(Debug, Clone)]
pub struct Bdm {
    table: CtmTable,
}

impl Bdm {
    /// The general-purpose configuration used for whole-sequence scores.
    pub fn general() -> Self {
        Self {
            table: CtmTable::new(GENERAL_BLOCK_LEN),
        }
    }

    /// A fixed-shape configuration, e.g. block length 8 for sliding
    /// windows.
    ///
    /// # Errors
    ///
    /// Returns [`BdmError::BlockLenOutOfRange`] when `block_len` is zero
    /// or exceeds [`MAX_BLOCK_LEN`].
    pub fn with_block_len(block_len: usize) -> Result<Self, BdmError> {
        if block_len == 0 || block_len > MAX_BLOCK_LEN {
            return Err(BdmError::BlockLenOutOfRange {
                requested: block_len,
                max: MAX_BLOCK_LEN,
            });
        }
        Ok(Self {
            table: CtmTable::new(block_len),
        })
    }

    pub fn block_len(&self) -> usize {
        self.table.block_len()
    }

    /// Scores a binary sequence, raw or normalized.
    ///
    /// The sequence is cut into consecutive blocks of the configured
    /// length; leftover symbols are ignored. The raw score sums
    /// `ctm(block) + log2(multiplicity)` over distinct blocks. The
    /// normalized score rescales that between the constant-sequence
    /// minimum and the maximally diverse maximum for the same block
    /// count, landing in `[0, 1]`.
    ///
    /// A non-empty sequence shorter than one block contains nothing to
    /// count and scores `0.0`.
    ///
    /// # Errors
    ///
    /// [`BdmError::EmptySequence`] for an empty input,
    /// [`BdmError::SymbolOutOfRange`] for symbols outside `{0, 1}`.
    pub fn score(&self, seq: &[i64], normalized: bool) -> Result<f64, BdmError> {
        if seq.is_empty() {
            return Err(BdmError::EmptySequence);
        }
        for (position, &value) in seq.iter().enumerate() {
            if value != 0 && value != 1 {
                return Err(BdmError::SymbolOutOfRange { position, value });
            }
        }

        // BTreeMap keeps the summation order stable, which keeps repeated
        // runs byte-identical downstream.
        let block_len = self.table.block_len();
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for block in seq.chunks_exact(block_len) {
            let mut bits = 0usize;
            for (i, &symbol) in block.iter().enumerate() {
                bits |= (symbol as usize) << i;
            }
            *counts.entry(bits).or_insert(0) += 1;
        }

        if counts.is_empty() {
            warn!(
                len = seq.len(),
                block_len, "sequence shorter than one block, scoring 0"
            );
            return Ok(0.0);
        }

        let raw: f64 = counts
            .iter()
            .map(|(&bits, &count)| self.table.value(bits) + f64::from(count).log2())
            .sum();
        if !normalized {
            return Ok(raw);
        }

        let block_count: u32 = counts.values().sum();
        let min = self.table.min_value() + f64::from(block_count).log2();
        let max = self.table.top_sum(block_count as usize);
        if max - min < f64::EPSILON {
            return Ok(0.0);
        }
        Ok((raw - min) / (max - min))
    }
}
