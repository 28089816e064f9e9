//! Data models for METAR decoding
//!
//! This module contains the decoded report structure and the value objects for
//! each weather element it carries.

use crate::app::services::lookup_tables;
use crate::app::services::report_decoder::categorization::{categorize, summarize};
use crate::config::CategoryThresholds;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Flight Category
// =============================================================================

/// Derived severity tier summarizing how restrictive conditions are for visual flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightCategory {
    /// No significant or severe trigger present
    Clear,

    /// Reduced visibility, stronger wind, low ceiling or obscuration
    Significant,

    /// Thunderstorms, showers, strong wind or very low visibility
    Severe,
}

impl FlightCategory {
    /// Get the display label for this category
    pub fn label(self) -> &'static str {
        match self {
            FlightCategory::Clear => "Clear",
            FlightCategory::Significant => "Significant",
            FlightCategory::Severe => "Severe",
        }
    }

    /// Get all categories from least to most severe
    pub fn all_values() -> [FlightCategory; 3] {
        [
            FlightCategory::Clear,
            FlightCategory::Significant,
            FlightCategory::Severe,
        ]
    }
}

impl FromStr for FlightCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" => Ok(FlightCategory::Clear),
            "significant" => Ok(FlightCategory::Significant),
            "severe" => Ok(FlightCategory::Severe),
            _ => Err(Error::configuration(format!(
                "Invalid flight category '{}': must be clear, significant, or severe",
                s
            ))),
        }
    }
}

impl std::fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Wind
// =============================================================================

/// Unit of a reported wind speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindUnit {
    Knots,
    MetersPerSecond,
}

impl WindUnit {
    /// Parse the unit suffix of a wind group (`KT` or `MPS`)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KT" => Some(WindUnit::Knots),
            "MPS" => Some(WindUnit::MetersPerSecond),
            _ => None,
        }
    }

    /// Lowercase abbreviation used in descriptions
    pub fn abbreviation(self) -> &'static str {
        match self {
            WindUnit::Knots => "kt",
            WindUnit::MetersPerSecond => "mps",
        }
    }
}

/// Decoded wind group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wind {
    /// Direction in degrees; `None` when variable or when no wind group was read
    pub direction: Option<u16>,

    /// Direction reported with the `VRB` marker
    pub variable: bool,

    /// Sustained speed in the reported unit
    pub speed_knots: u32,

    /// Gust speed, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gust_knots: Option<u32>,

    pub unit: WindUnit,

    pub description: String,
}

impl Wind {
    /// Wind used when the report carries no readable wind group
    pub fn calm() -> Self {
        Self {
            direction: None,
            variable: false,
            speed_knots: 0,
            gust_knots: None,
            unit: WindUnit::Knots,
            description: crate::constants::CALM_WIND_DESCRIPTION.to_string(),
        }
    }

    /// Build a wind value and derive its description
    pub fn new(direction: Option<u16>, speed: u32, gust: Option<u32>, unit: WindUnit) -> Self {
        let gust_part = gust
            .map(|g| format!(" gusting to {}", g))
            .unwrap_or_default();

        let description = match direction {
            None => format!("Variable at {} {}", speed, unit.abbreviation()),
            Some(0) if speed == 0 && gust.is_none() => {
                crate::constants::CALM_WIND_DESCRIPTION.to_string()
            }
            Some(degrees) => format!(
                "{} at {} {}{}",
                lookup_tables::compass_label(degrees),
                speed,
                unit.abbreviation(),
                gust_part
            ),
        };

        Self {
            direction,
            variable: direction.is_none(),
            speed_knots: speed,
            gust_knots: gust,
            unit,
            description,
        }
    }
}

// =============================================================================
// Visibility
// =============================================================================

/// Decoded prevailing visibility
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visibility {
    /// Visibility in statute miles; fractional groups are resolved to decimals
    pub value_statute_miles: f64,

    pub description: String,
}

impl Visibility {
    /// Visibility from a reported statute-mile group
    pub fn new(value_statute_miles: f64) -> Self {
        Self {
            value_statute_miles,
            description: format!("{} statute miles", value_statute_miles),
        }
    }

    /// Visibility assumed when no group is reported
    pub fn unrestricted(value_statute_miles: f64) -> Self {
        Self {
            value_statute_miles,
            description: format!("{}+ statute miles", value_statute_miles),
        }
    }
}

// =============================================================================
// Sky Condition
// =============================================================================

/// Known sky-cover codes, in prefix-matching order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkyCover {
    Clr,
    Skc,
    Few,
    Sct,
    Bkn,
    Ovc,
    Vv,
}

impl SkyCover {
    /// All codes in the order they are tried against a token
    pub const ALL: [SkyCover; 7] = [
        SkyCover::Clr,
        SkyCover::Skc,
        SkyCover::Few,
        SkyCover::Sct,
        SkyCover::Bkn,
        SkyCover::Ovc,
        SkyCover::Vv,
    ];

    /// Report code of this sky cover
    pub fn code(self) -> &'static str {
        match self {
            SkyCover::Clr => "CLR",
            SkyCover::Skc => "SKC",
            SkyCover::Few => "FEW",
            SkyCover::Sct => "SCT",
            SkyCover::Bkn => "BKN",
            SkyCover::Ovc => "OVC",
            SkyCover::Vv => "VV",
        }
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        lookup_tables::sky_description(self.code())
    }

    /// First code that prefixes `token`, if any
    pub fn from_prefix(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|cover| token.starts_with(cover.code()))
    }

    /// Broken and overcast layers form a ceiling
    pub fn is_ceiling(self) -> bool {
        matches!(self, SkyCover::Bkn | SkyCover::Ovc)
    }
}

/// Decoded sky condition (first sky-cover group of the report)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyCondition {
    pub code: SkyCover,
    pub description: String,
}

impl SkyCondition {
    pub fn new(code: SkyCover) -> Self {
        Self {
            code,
            description: code.description().to_string(),
        }
    }
}

impl Default for SkyCondition {
    fn default() -> Self {
        Self::new(SkyCover::Clr)
    }
}

// =============================================================================
// Temperature and Pressure
// =============================================================================

/// Decoded temperature and dew point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Temperature {
    pub celsius: i32,
    pub dew_point_celsius: i32,
    pub description: String,
}

impl Temperature {
    pub fn new(celsius: i32, dew_point_celsius: i32) -> Self {
        Self {
            celsius,
            dew_point_celsius,
            description: format!("{}°C / {}°C", celsius, dew_point_celsius),
        }
    }
}

impl Default for Temperature {
    fn default() -> Self {
        let value = crate::constants::DEFAULT_TEMPERATURE_C;
        Self::new(value, value)
    }
}

/// Decoded altimeter setting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pressure {
    pub inches_of_mercury: f64,
    pub description: String,
}

impl Pressure {
    pub fn new(inches_of_mercury: f64) -> Self {
        Self {
            inches_of_mercury,
            description: format!("{:.2} inHg", inches_of_mercury),
        }
    }
}

impl Default for Pressure {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PRESSURE_INHG)
    }
}

// =============================================================================
// Present Weather
// =============================================================================

/// Intensity or proximity qualifier of a present-weather group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Heavy,
    Vicinity,
}

impl Intensity {
    /// Split an intensity prefix (`-`, `+`, `VC`) off a present-weather token
    pub fn split_prefix(token: &str) -> (Self, &str) {
        if let Some(rest) = token.strip_prefix('+') {
            (Intensity::Heavy, rest)
        } else if let Some(rest) = token.strip_prefix('-') {
            (Intensity::Light, rest)
        } else if let Some(rest) = token.strip_prefix("VC") {
            (Intensity::Vicinity, rest)
        } else {
            (Intensity::Moderate, token)
        }
    }

    /// Label prepended to descriptions; moderate intensity has none
    pub fn label(self) -> Option<&'static str> {
        match self {
            Intensity::Light => Some("Light"),
            Intensity::Moderate => None,
            Intensity::Heavy => Some("Heavy"),
            Intensity::Vicinity => Some("Vicinity"),
        }
    }
}

/// Decoded present-weather group such as `+TSRA` or `BR`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherPhenomenon {
    /// Token as it appeared in the report
    pub token: String,

    pub intensity: Intensity,

    /// Two-letter phenomenon codes in report order
    pub codes: Vec<String>,

    pub description: String,
}

// =============================================================================
// Parsed Report
// =============================================================================

/// Fully decoded report
///
/// Fields are read-only. `category` and `summary` are derived when the
/// report is built and always agree with the fields that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedReport {
    raw: String,
    station: String,
    observed_at: String,
    wind: Wind,
    visibility: Visibility,
    sky_condition: SkyCondition,
    temperature: Temperature,
    pressure: Pressure,
    remarks: String,
    phenomena: Vec<WeatherPhenomenon>,
    category: FlightCategory,
    summary: String,
}

impl ParsedReport {
    /// Assemble a report and derive its category and summary
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        raw: String,
        station: String,
        observed_at: String,
        wind: Wind,
        visibility: Visibility,
        sky_condition: SkyCondition,
        temperature: Temperature,
        pressure: Pressure,
        remarks: String,
        phenomena: Vec<WeatherPhenomenon>,
        thresholds: &CategoryThresholds,
    ) -> Self {
        let category = categorize(
            visibility.value_statute_miles,
            wind.speed_knots,
            sky_condition.code,
            &raw,
            thresholds,
        );
        let summary = summarize(&sky_condition, &visibility, &temperature, &wind, &pressure);

        Self {
            raw,
            station,
            observed_at,
            wind,
            visibility,
            sky_condition,
            temperature,
            pressure,
            remarks,
            phenomena,
            category,
            summary,
        }
    }

    /// Original input text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Station identifier token
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Display name of the station, or the identifier when unknown
    pub fn station_name(&self) -> &str {
        lookup_tables::station_name(&self.station)
    }

    /// Day/time group, verbatim
    pub fn observed_at(&self) -> &str {
        &self.observed_at
    }

    pub fn wind(&self) -> &Wind {
        &self.wind
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn sky_condition(&self) -> &SkyCondition {
        &self.sky_condition
    }

    pub fn temperature(&self) -> &Temperature {
        &self.temperature
    }

    pub fn pressure(&self) -> &Pressure {
        &self.pressure
    }

    /// Remarks following `RMK`, or an empty string
    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    /// Present-weather groups found before the sky condition
    pub fn phenomena(&self) -> &[WeatherPhenomenon] {
        &self.phenomena
    }

    pub fn category(&self) -> FlightCategory {
        self.category
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}
