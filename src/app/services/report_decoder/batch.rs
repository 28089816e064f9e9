//! Batch decoding of multi-line report text
//!
//! Each non-blank line is decoded independently. Lines that fail are skipped
//! and recorded in the statistics; survivors keep their input order.

use tracing::{debug, info, warn};

use super::decoder::ReportDecoder;
use super::stats::{DecodeResult, DecodeStats};
use crate::app::models::{FlightCategory, ParsedReport};

impl ReportDecoder {
    /// Decode every non-blank line, silently omitting lines that fail
    pub fn decode_all(&self, text: &str) -> Vec<ParsedReport> {
        self.decode_all_with_stats(text).reports
    }

    /// Decode every non-blank line and report what was skipped
    pub fn decode_all_with_stats(&self, text: &str) -> DecodeResult {
        let mut stats = DecodeStats::new();
        let mut reports = Vec::new();

        for (line_index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            stats.total_lines += 1;

            match self.try_decode(line) {
                Ok(report) => {
                    reports.push(report);
                    stats.reports_decoded += 1;
                }
                Err(e) => {
                    stats.lines_skipped += 1;
                    stats.errors.push(format!("Line {}: {}", line_index + 1, e));
                    debug!("Skipped line {}: {}", line_index + 1, e);
                }
            }
        }

        if stats.total_lines > 0 && stats.lines_skipped * 2 > stats.total_lines {
            warn!(
                "Most lines could not be decoded: {} of {} skipped",
                stats.lines_skipped, stats.total_lines
            );
        }

        info!(
            "Decoded {} reports from {} lines",
            stats.reports_decoded, stats.total_lines
        );

        DecodeResult { reports, stats }
    }
}

/// Keep reports of the given category; `None` keeps everything
pub fn filter_by_category(
    reports: &[ParsedReport],
    category: Option<FlightCategory>,
) -> Vec<&ParsedReport> {
    reports
        .iter()
        .filter(|report| category.is_none_or(|c| report.category() == c))
        .collect()
}
