//! Flight category and summary derivation
//!
//! Both functions are pure: the same decoded fields and raw text always yield
//! the same category and summary.

use crate::app::models::{
    FlightCategory, Pressure, SkyCondition, SkyCover, Temperature, Visibility, Wind,
};
use crate::config::CategoryThresholds;
use crate::constants::category_rules::{SEVERE_PHENOMENA, SIGNIFICANT_PHENOMENA};

/// Derive the flight category, first matching tier wins
///
/// Severe: thunderstorm or showers anywhere in the raw text, wind above the
/// severe limit, or visibility at or below the severe limit.
/// Significant: visibility below the significant limit, wind above the
/// significant limit, a broken or overcast layer, or mist, haze or fog
/// anywhere in the raw text.
pub fn categorize(
    visibility_sm: f64,
    wind_speed: u32,
    sky: SkyCover,
    raw: &str,
    thresholds: &CategoryThresholds,
) -> FlightCategory {
    if contains_any(raw, SEVERE_PHENOMENA)
        || wind_speed > thresholds.severe_wind_knots
        || visibility_sm <= thresholds.severe_visibility_sm
    {
        return FlightCategory::Severe;
    }

    if visibility_sm < thresholds.significant_visibility_sm
        || wind_speed > thresholds.significant_wind_knots
        || sky.is_ceiling()
        || contains_any(raw, SIGNIFICANT_PHENOMENA)
    {
        return FlightCategory::Significant;
    }

    FlightCategory::Clear
}

fn contains_any(raw: &str, codes: &[&str]) -> bool {
    codes.iter().any(|code| raw.contains(code))
}

/// Compose the one-line summary from already derived descriptions
pub fn summarize(
    sky: &SkyCondition,
    visibility: &Visibility,
    temperature: &Temperature,
    wind: &Wind,
    pressure: &Pressure,
) -> String {
    format!(
        "{}, visibility {}, Temp {}, {}, Pressure {}",
        sky.description,
        visibility.description,
        temperature.description,
        wind.description,
        pressure.description
    )
}
