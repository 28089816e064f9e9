//! Application constants for the METAR decoder
//!
//! This module contains the token markers, default values and category
//! keywords used throughout the decoder.

// =============================================================================
// Report Structure
// =============================================================================

/// Minimum number of whitespace-separated tokens in a decodable report
pub const MIN_REPORT_TOKENS: usize = 6;

/// Token index of the station identifier
pub const STATION_TOKEN_INDEX: usize = 0;

/// Token index of the day/time group
pub const OBSERVATION_TIME_TOKEN_INDEX: usize = 1;

/// Token index of the wind group
pub const WIND_TOKEN_INDEX: usize = 2;

/// Token index where the visibility scan starts
pub const VISIBILITY_TOKEN_INDEX: usize = 3;

/// Token that introduces the free-text remarks section
pub const REMARKS_MARKER: &str = "RMK";

/// Suffix marking a visibility group in statute miles
pub const STATUTE_MILE_SUFFIX: &str = "SM";

/// Prefix of the altimeter group
pub const ALTIMETER_PREFIX: char = 'A';

/// Exact length of the altimeter group (e.g. `A2992`)
pub const ALTIMETER_TOKEN_LEN: usize = 5;

// =============================================================================
// Defaults for Absent Groups
// =============================================================================

/// Visibility assumed when no statute-mile group is reported
pub const DEFAULT_VISIBILITY_SM: f64 = 10.0;

/// Altimeter setting assumed when no altimeter group is reported
pub const DEFAULT_PRESSURE_INHG: f64 = 29.92;

/// Temperature and dew point assumed when no temperature group is reported
pub const DEFAULT_TEMPERATURE_C: i32 = 0;

/// Wind description used when the wind group is missing or unreadable
pub const CALM_WIND_DESCRIPTION: &str = "Calm";

// =============================================================================
// Flight Category Rules
// =============================================================================

/// Category thresholds and raw-text keywords
pub mod category_rules {
    /// Wind speed above which conditions are severe
    pub const SEVERE_WIND_KNOTS: u32 = 25;

    /// Wind speed above which conditions are significant
    pub const SIGNIFICANT_WIND_KNOTS: u32 = 15;

    /// Visibility at or below which conditions are severe
    pub const SEVERE_VISIBILITY_SM: f64 = 3.0;

    /// Visibility below which conditions are significant
    pub const SIGNIFICANT_VISIBILITY_SM: f64 = 6.0;

    /// Phenomenon codes anywhere in the raw text that force a severe category
    /// (thunderstorm, showers)
    pub const SEVERE_PHENOMENA: &[&str] = &["TS", "SH"];

    /// Phenomenon codes anywhere in the raw text that make conditions
    /// significant (mist, haze, fog)
    pub const SIGNIFICANT_PHENOMENA: &[&str] = &["BR", "HZ", "FG"];
}

// =============================================================================
// Sample Data
// =============================================================================

/// Example report block printed by `metar-decoder example`
pub const EXAMPLE_REPORTS: &str = "\
KRIC 110454Z 35005KT 10SM CLR 06/M02 A2980 RMK AO2 SLP096 T00561017 401720000
KRIC 110354Z 03003KT 10SM CLR 06/M02 A2981 RMK AO2 SLP099 T00611017
KJFK 110451Z 32008KT 3SM BR BKN008 OVC015 04/03 A2979 RMK AO2 SLP097
KSFO 110456Z 28012G18KT 6SM HZ SCT012 BKN025 14/12 A2995 RMK AO2 SLP148";
