//! Test utilities and fixtures for report decoder testing
//!
//! This module provides sample report lines and helper functions used across
//! the decoder test modules.

use crate::app::models::ParsedReport;
use crate::app::services::report_decoder::ReportDecoder;

// Test modules
mod batch_tests;
mod field_parser_tests;

/// Clear-sky report with negative dew point and remarks
pub const RICHMOND_CLEAR: &str = "KRIC 110454Z 35005KT 10SM CLR 06/M02 A2980 RMK AO2 SLP096";

/// Mist with a low broken ceiling at exactly three statute miles
pub const JFK_MIST: &str = "KJFK 110451Z 32008KT 3SM BR BKN008 OVC015 04/03 A2979 RMK AO2 SLP097";

/// Gusting wind with heavy thunderstorm rain and no remarks
pub const DENVER_THUNDERSTORM: &str = "KDEN 310000Z 22028G35KT 1SM +TSRA OVC005 08/06 A2950";

/// Haze with six statute miles and gusts below the significant wind limit
pub const SFO_HAZE: &str = "KSFO 110456Z 28012G18KT 6SM HZ SCT012 BKN025 14/12 A2995 RMK AO2 SLP148";

/// A line with too few tokens to be a report
pub const TRUNCATED: &str = "KRIC 110454Z 35005KT";

/// Decode with the default configuration, panicking on failure
pub fn decode_ok(line: &str) -> ParsedReport {
    ReportDecoder::default()
        .try_decode(line)
        .unwrap_or_else(|e| panic!("failed to decode '{}': {}", line, e))
}

/// Tokenize a report line the way the decoder does
pub fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Multi-line block mixing valid, invalid and blank lines
pub fn create_mixed_batch() -> String {
    format!(
        "{}\n\n{}\n   \n{}\n{}\n",
        RICHMOND_CLEAR, TRUNCATED, DENVER_THUNDERSTORM, JFK_MIST
    )
}
