//! Report decoder for METAR observation lines
//!
//! This module turns raw report text into [`ParsedReport`](crate::ParsedReport)
//! values. Decoding is best-effort: a line that cannot be decoded yields no
//! result rather than an error for the caller to handle.
//!
//! ## Architecture
//!
//! The decoder is organized into logical components:
//! - [`decoder`] - Tokenization and per-line orchestration
//! - [`field_parsers`] - Extraction of each weather group from the token list
//! - [`categorization`] - Flight category and summary derivation
//! - [`batch`] - Multi-line decoding and category filtering
//! - [`stats`] - Batch statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::ReportDecoder;
//!
//! let decoder = ReportDecoder::default();
//! let result = decoder.decode_all_with_stats(
//!     "KDEN 310000Z 22028G35KT 1SM +TSRA OVC005 08/06 A2950\nKDEN 310000Z",
//! );
//!
//! assert_eq!(result.reports.len(), 1);
//! assert_eq!(result.stats.lines_skipped, 1);
//! ```

pub mod batch;
pub mod categorization;
pub mod decoder;
pub mod field_parsers;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use batch::filter_by_category;
pub use decoder::ReportDecoder;
pub use stats::{CategoryCounts, DecodeResult, DecodeStats};
