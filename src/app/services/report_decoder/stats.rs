//! Decode statistics and result structures for batch processing
//!
//! This module provides types for tracking how many lines decoded, why the
//! rest were skipped, and how the decoded reports split across categories.

use crate::app::models::{FlightCategory, ParsedReport};

/// Batch decode result with reports and statistics
#[derive(Debug, Clone)]
pub struct DecodeResult {
    /// Successfully decoded reports, in input order
    pub reports: Vec<ParsedReport>,

    /// Per-batch decode statistics
    pub stats: DecodeStats,
}

impl DecodeResult {
    /// Count decoded reports per flight category
    pub fn category_counts(&self) -> CategoryCounts {
        CategoryCounts::from_reports(&self.reports)
    }
}

/// Simple decode statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecodeStats {
    /// Number of non-blank lines encountered
    pub total_lines: usize,

    /// Number of lines decoded into reports
    pub reports_decoded: usize,

    /// Number of lines skipped because they could not be decoded
    pub lines_skipped: usize,

    /// Skip reasons, one per skipped line
    pub errors: Vec<String>,
}

impl DecodeStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            reports_decoded: 0,
            lines_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.reports_decoded as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Check if decoding was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of reports in each flight category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct CategoryCounts {
    pub clear: usize,
    pub significant: usize,
    pub severe: usize,
}

impl CategoryCounts {
    /// Tally the categories of `reports`
    pub fn from_reports(reports: &[ParsedReport]) -> Self {
        reports.iter().fold(Self::default(), |mut counts, report| {
            match report.category() {
                FlightCategory::Clear => counts.clear += 1,
                FlightCategory::Significant => counts.significant += 1,
                FlightCategory::Severe => counts.severe += 1,
            }
            counts
        })
    }

    /// Count for a single category
    pub fn get(&self, category: FlightCategory) -> usize {
        match category {
            FlightCategory::Clear => self.clear,
            FlightCategory::Significant => self.significant,
            FlightCategory::Severe => self.severe,
        }
    }

    /// Total number of reports counted
    pub fn total(&self) -> usize {
        self.clear + self.significant + self.severe
    }
}
