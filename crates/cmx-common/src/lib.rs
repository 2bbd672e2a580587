//! Shared utilities for the complexity pipeline crates.
//!
//! Currently this is limited to Polars `AnyValue` cell helpers used by the
//! ingest and transform stages.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{any_to_f64, any_to_string, format_numeric, parse_f64};
