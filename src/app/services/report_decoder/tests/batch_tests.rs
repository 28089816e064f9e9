//! Tests for multi-line batch decoding

use super::*;
use crate::app::models::FlightCategory;
use crate::app::services::report_decoder::filter_by_category;

#[test]
fn test_invalid_line_omitted() {
    let text = format!("{}\n{}\n{}", RICHMOND_CLEAR, TRUNCATED, JFK_MIST);
    let reports = ReportDecoder::default().decode_all(&text);

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].station(), "KRIC");
    assert_eq!(reports[1].station(), "KJFK");
}

#[test]
fn test_order_preserved_with_blank_lines() {
    let reports = ReportDecoder::default().decode_all(&create_mixed_batch());

    let stations: Vec<&str> = reports.iter().map(|r| r.station()).collect();
    assert_eq!(stations, vec!["KRIC", "KDEN", "KJFK"]);
}

#[test]
fn test_windows_line_endings() {
    let text = format!("{}\r\n{}\r\n", SFO_HAZE, DENVER_THUNDERSTORM);
    let reports = ReportDecoder::default().decode_all(&text);

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].raw(), SFO_HAZE);
}

#[test]
fn test_empty_input() {
    let decoder = ReportDecoder::default();
    assert!(decoder.decode_all("").is_empty());
    assert!(decoder.decode_all("\n \n\t\n").is_empty());

    let result = decoder.decode_all_with_stats("\n\n");
    assert_eq!(result.stats.total_lines, 0);
    assert_eq!(result.stats.lines_skipped, 0);
}

#[test]
fn test_stats_record_skipped_lines() {
    let result = ReportDecoder::default().decode_all_with_stats(&create_mixed_batch());

    assert_eq!(result.stats.total_lines, 4);
    assert_eq!(result.stats.reports_decoded, 3);
    assert_eq!(result.stats.lines_skipped, 1);
    assert_eq!(result.stats.errors.len(), 1);
    // The truncated report is on the third physical line
    assert!(result.stats.errors[0].starts_with("Line 3:"));
    assert!(result.stats.errors[0].contains("at least 6"));
}

#[test]
fn test_decode_all_matches_stats_reports() {
    let decoder = ReportDecoder::default();
    let text = create_mixed_batch();

    assert_eq!(decoder.decode_all(&text), decoder.decode_all_with_stats(&text).reports);
}

#[test]
fn test_batch_is_restartable() {
    let decoder = ReportDecoder::default();

    let first = decoder.decode_all(RICHMOND_CLEAR);
    let second = decoder.decode_all(JFK_MIST);
    let again = decoder.decode_all(RICHMOND_CLEAR);

    assert_eq!(first.len(), 1);
    assert_eq!(second[0].station(), "KJFK");
    assert_eq!(first, again);
}

#[test]
fn test_category_counts() {
    let text = format!("{}\n{}\n{}\n{}", RICHMOND_CLEAR, JFK_MIST, DENVER_THUNDERSTORM, SFO_HAZE);
    let result = ReportDecoder::default().decode_all_with_stats(&text);
    let counts = result.category_counts();

    assert_eq!(counts.clear, 1);
    assert_eq!(counts.significant, 1);
    assert_eq!(counts.severe, 2);
    assert_eq!(counts.total(), 4);
    assert_eq!(counts.get(FlightCategory::Severe), 2);
}

#[test]
fn test_filter_by_category() {
    let text = format!("{}\n{}\n{}\n{}", RICHMOND_CLEAR, JFK_MIST, DENVER_THUNDERSTORM, SFO_HAZE);
    let reports = ReportDecoder::default().decode_all(&text);

    assert_eq!(filter_by_category(&reports, None).len(), 4);

    let severe = filter_by_category(&reports, Some(FlightCategory::Severe));
    let stations: Vec<&str> = severe.iter().map(|r| r.station()).collect();
    assert_eq!(stations, vec!["KJFK", "KDEN"]);

    let clear = filter_by_category(&reports, Some(FlightCategory::Clear));
    assert_eq!(clear.len(), 1);
    assert_eq!(clear[0].station(), "KRIC");
}

#[test]
fn test_free_functions_use_defaults() {
    let text = format!("{}\n{}", RICHMOND_CLEAR, TRUNCATED);

    assert_eq!(crate::decode_all(&text).len(), 1);
    assert!(crate::decode(TRUNCATED).is_none());
    assert_eq!(crate::decode(RICHMOND_CLEAR), Some(decode_ok(RICHMOND_CLEAR)));
}
