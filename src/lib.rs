//! METAR Decoder Library
//!
//! A Rust library for decoding aviation routine weather reports (METAR) into
//! structured observations with a derived flight category and a readable summary.
//!
//! This library provides tools for:
//! - Decoding single report lines into fully populated [`ParsedReport`] values
//! - Batch decoding of multi-line text with best-effort skipping of bad lines
//! - Per-line decode statistics for stricter pipelines
//! - Read-only lookup tables for stations, sky cover, phenomena and compass points
//!
//! ```rust
//! let report = metar_decoder::decode(
//!     "KRIC 110454Z 35005KT 10SM CLR 06/M02 A2980 RMK AO2 SLP096",
//! )
//! .unwrap();
//!
//! assert_eq!(report.station(), "KRIC");
//! assert_eq!(report.category(), metar_decoder::FlightCategory::Clear);
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod lookup_tables;
        pub mod report_decoder;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    FlightCategory, Intensity, ParsedReport, Pressure, SkyCondition, SkyCover, Temperature,
    Visibility, WeatherPhenomenon, Wind, WindUnit,
};
pub use app::services::report_decoder::{
    CategoryCounts, DecodeResult, DecodeStats, ReportDecoder, filter_by_category,
};
pub use config::{CategoryThresholds, DecoderConfig};

/// Result type alias for the METAR decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for METAR decoding operations
///
/// Per-line decode failures are recoverable: the batch driver records them and
/// moves on to the next line.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Report line has too few tokens to be a report
    #[error("Report has {found} tokens, at least {required} are required")]
    InsufficientTokens { found: usize, required: usize },

    /// Wind group could not be converted
    #[error("Invalid wind group '{token}': {message}")]
    InvalidWind { token: String, message: String },

    /// Visibility group could not be converted
    #[error("Invalid visibility group '{token}': {message}")]
    InvalidVisibility { token: String, message: String },

    /// Temperature/dew point group could not be converted
    #[error("Invalid temperature group '{token}': {message}")]
    InvalidTemperature { token: String, message: String },

    /// Altimeter group could not be converted
    #[error("Invalid altimeter group '{token}': {message}")]
    InvalidPressure { token: String, message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Lines were skipped while strict decoding was requested
    #[error("{skipped} of {total} report lines could not be decoded")]
    SkippedLines { skipped: usize, total: usize },
}

impl Error {
    /// Create an insufficient tokens error
    pub fn insufficient_tokens(found: usize, required: usize) -> Self {
        Self::InsufficientTokens { found, required }
    }

    /// Create an invalid wind error
    pub fn invalid_wind(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidWind {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create an invalid visibility error
    pub fn invalid_visibility(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidVisibility {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create an invalid temperature error
    pub fn invalid_temperature(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTemperature {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create an invalid pressure error
    pub fn invalid_pressure(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPressure {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a skipped lines error
    pub fn skipped_lines(skipped: usize, total: usize) -> Self {
        Self::SkippedLines { skipped, total }
    }

    /// Whether this error describes a single malformed report line
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientTokens { .. }
                | Self::InvalidWind { .. }
                | Self::InvalidVisibility { .. }
                | Self::InvalidTemperature { .. }
                | Self::InvalidPressure { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

/// Decode a single report line with the default configuration
///
/// Returns `None` for lines that cannot be decoded.
pub fn decode(line: &str) -> Option<ParsedReport> {
    ReportDecoder::default().decode(line)
}

/// Decode every non-blank line of `text` with the default configuration
///
/// Lines that fail to decode are omitted; survivors keep their input order.
pub fn decode_all(text: &str) -> Vec<ParsedReport> {
    ReportDecoder::default().decode_all(text)
}
