//! Core report decoder implementation
//!
//! This module tokenizes a single report line and coordinates the field
//! parsers. The strict entry point returns the reason a line was rejected;
//! the best-effort entry point turns that into `None`.

use tracing::debug;

use super::field_parsers::{
    parse_phenomena, parse_pressure, parse_remarks, parse_sky_condition, parse_temperature,
    parse_visibility, parse_wind,
};
use crate::app::models::ParsedReport;
use crate::config::DecoderConfig;
use crate::constants::{
    MIN_REPORT_TOKENS, OBSERVATION_TIME_TOKEN_INDEX, STATION_TOKEN_INDEX, VISIBILITY_TOKEN_INDEX,
    WIND_TOKEN_INDEX,
};
use crate::{Error, Result};

/// Decoder for METAR report lines
///
/// Holds only immutable configuration, so one decoder can be shared freely
/// and reused for any number of lines or batches.
#[derive(Debug, Clone, Default)]
pub struct ReportDecoder {
    config: DecoderConfig,
}

impl ReportDecoder {
    /// Create a decoder with a validated configuration
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a line, returning `None` when it cannot be decoded
    pub fn decode(&self, line: &str) -> Option<ParsedReport> {
        match self.try_decode(line) {
            Ok(report) => Some(report),
            Err(e) => {
                debug!("Skipped report '{}': {}", line.trim(), e);
                None
            }
        }
    }

    /// Decode a line, returning the reason when it cannot be decoded
    pub fn try_decode(&self, line: &str) -> Result<ParsedReport> {
        let raw = line.trim();
        let tokens: Vec<&str> = raw.split_whitespace().collect();

        if tokens.len() < MIN_REPORT_TOKENS {
            return Err(Error::insufficient_tokens(tokens.len(), MIN_REPORT_TOKENS));
        }

        let wind = parse_wind(tokens[WIND_TOKEN_INDEX])?;
        let (visibility, sky_index) = parse_visibility(
            &tokens,
            VISIBILITY_TOKEN_INDEX,
            self.config.default_visibility_sm,
        )?;
        let phenomena = parse_phenomena(&tokens, sky_index);
        let sky_condition = parse_sky_condition(&tokens, sky_index);
        let temperature = parse_temperature(&tokens)?;
        let pressure = parse_pressure(&tokens)?;
        let remarks = parse_remarks(&tokens);

        Ok(ParsedReport::new(
            raw.to_string(),
            tokens[STATION_TOKEN_INDEX].to_string(),
            tokens[OBSERVATION_TIME_TOKEN_INDEX].to_string(),
            wind,
            visibility,
            sky_condition,
            temperature,
            pressure,
            remarks,
            phenomena,
            &self.config.thresholds,
        ))
    }
}
