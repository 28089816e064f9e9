//! Decode command implementation
//!
//! Reads report lines, runs them through the batch driver and prints the
//! decoded reports as a table or as JSON.

use super::shared::{colored_category, read_input};
use crate::app::models::ParsedReport;
use crate::app::services::report_decoder::{
    CategoryCounts, DecodeResult, DecodeStats, ReportDecoder, filter_by_category,
};
use crate::cli::args::{DecodeArgs, OutputFormat};
use crate::{Error, Result};
use colored::*;
use std::io::Write;
use tracing::{info, warn};

/// Run the decode command, writing decoded reports to `out`
///
/// In strict mode skipped lines are listed on stderr and the command fails
/// after the decoded reports have been written.
pub fn run_decode(args: &DecodeArgs, out: &mut dyn Write) -> Result<DecodeStats> {
    let text = read_input(args.input_file().map(|path| path.as_path()))?;
    let decoder = ReportDecoder::default();
    let result = decoder.decode_all_with_stats(&text);

    write_reports(args, &result, out)?;

    let stats = result.stats;
    if stats.lines_skipped > 0 {
        if args.strict {
            for error in &stats.errors {
                eprintln!("{} {}", "Skipped".bright_yellow().bold(), error);
            }
            return Err(Error::skipped_lines(stats.lines_skipped, stats.total_lines));
        }
        warn!(
            "{} of {} lines could not be decoded",
            stats.lines_skipped, stats.total_lines
        );
    }

    Ok(stats)
}

/// Write the decoded reports in the requested format
pub fn write_reports(args: &DecodeArgs, result: &DecodeResult, out: &mut dyn Write) -> Result<()> {
    let selected = filter_by_category(&result.reports, args.category);
    if let Some(category) = args.category {
        info!(
            "Showing {} of {} reports in category {}",
            selected.len(),
            result.reports.len(),
            category
        );
    }

    match args.output_format {
        OutputFormat::Human => write_human_reports(&selected, result, out),
        OutputFormat::Json => write_json_reports(&selected, out),
    }
}

/// Generate the human-readable report table
fn write_human_reports(
    reports: &[&ParsedReport],
    result: &DecodeResult,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "{}", "Decoded METAR Reports".bright_green().bold())?;
    writeln!(out, "=====================")?;

    if reports.is_empty() {
        writeln!(out, "No reports to display.")?;
    }

    for report in reports {
        writeln!(
            out,
            "{} {:<40} {:<8} {}",
            format!("{:<6}", report.station()).bright_white().bold(),
            report.station_name(),
            report.observed_at(),
            colored_category(report.category())
        )?;
        writeln!(out, "       {}", report.summary())?;
        if !report.remarks().is_empty() {
            writeln!(out, "       Remarks: {}", report.remarks())?;
        }
    }

    let counts = result.category_counts();
    writeln!(out)?;
    writeln!(out, "{}", summary_line(&result.stats, &counts))?;
    Ok(())
}

/// Generate the JSON report list
fn write_json_reports(reports: &[&ParsedReport], out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)
        .map_err(|e| Error::serialization("Failed to serialize decoded reports", e))?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// One-line batch summary with per-category counts
pub fn summary_line(stats: &DecodeStats, counts: &CategoryCounts) -> String {
    format!(
        "Decoded {} of {} lines ({} skipped): {} clear, {} significant, {} severe",
        stats.reports_decoded,
        stats.total_lines,
        stats.lines_skipped,
        counts.clear,
        counts.significant,
        counts.severe
    )
}
