//! Field parsing utilities for METAR reports
//!
//! Each function extracts one weather group from the tokenized report. Absent
//! groups resolve to their documented defaults; only groups that are present
//! but numerically malformed produce an error.

use crate::app::models::{
    Intensity, Pressure, SkyCondition, SkyCover, Temperature, Visibility, WeatherPhenomenon, Wind,
    WindUnit,
};
use crate::app::services::lookup_tables;
use crate::constants::{
    ALTIMETER_PREFIX, ALTIMETER_TOKEN_LEN, REMARKS_MARKER, STATUTE_MILE_SUFFIX,
};
use crate::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

// Digit classes are ASCII-only
lazy_static! {
    /// Direction (or `VRB`), speed, optional gust, unit
    static ref WIND_PATTERN: Regex =
        Regex::new(r"([0-9]{3}|VRB)([0-9]{2,3})(G([0-9]{2,3}))?(KT|MPS)").expect("valid wind pattern");

    /// Whole, fractional or decimal statute miles
    static ref VISIBILITY_PATTERN: Regex =
        Regex::new(r"([0-9]+(?:/[0-9]+)?|[0-9]+\.[0-9]+)SM").expect("valid visibility pattern");

    /// Temperature and dew point, `M` marking negative values
    static ref TEMPERATURE_PATTERN: Regex =
        Regex::new(r"^(M?[0-9]+)/(M?[0-9]+)$").expect("valid temperature pattern");
}

/// Parse the wind group, falling back to calm when the token does not match
pub fn parse_wind(token: &str) -> Result<Wind> {
    let Some(captures) = WIND_PATTERN.captures(token) else {
        debug!("No wind group in '{}', assuming calm", token);
        return Ok(Wind::calm());
    };

    let direction = match &captures[1] {
        "VRB" => None,
        digits => Some(
            digits
                .parse::<u16>()
                .map_err(|e| Error::invalid_wind(token, format!("direction: {}", e)))?,
        ),
    };

    let speed = captures[2]
        .parse::<u32>()
        .map_err(|e| Error::invalid_wind(token, format!("speed: {}", e)))?;

    let gust = captures
        .get(4)
        .map(|m| m.as_str().parse::<u32>())
        .transpose()
        .map_err(|e| Error::invalid_wind(token, format!("gust: {}", e)))?;

    let unit = WindUnit::from_code(&captures[5])
        .ok_or_else(|| Error::invalid_wind(token, "unknown speed unit"))?;

    Ok(Wind::new(direction, speed, gust, unit))
}

/// Parse the visibility group at `index`
///
/// Returns the visibility and the index at which the sky-condition scan
/// starts. The index only advances when the token carries a statute-mile
/// suffix.
pub fn parse_visibility(
    tokens: &[&str],
    index: usize,
    default_visibility_sm: f64,
) -> Result<(Visibility, usize)> {
    let Some(token) = tokens.get(index).filter(|t| t.contains(STATUTE_MILE_SUFFIX)) else {
        return Ok((Visibility::unrestricted(default_visibility_sm), index));
    };

    let visibility = match VISIBILITY_PATTERN.captures(token) {
        Some(captures) => Visibility::new(parse_statute_miles(&captures[1], token)?),
        None => {
            debug!("Unreadable visibility group '{}', using default", token);
            Visibility::unrestricted(default_visibility_sm)
        }
    };

    Ok((visibility, index + 1))
}

/// Resolve `N`, `N/D` or `N.N` statute miles to a decimal value
///
/// Fractions are divided explicitly; a zero denominator is rejected.
pub fn parse_statute_miles(value: &str, token: &str) -> Result<f64> {
    match value.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator = numerator
                .parse::<u32>()
                .map_err(|e| Error::invalid_visibility(token, format!("numerator: {}", e)))?;
            let denominator = denominator
                .parse::<u32>()
                .map_err(|e| Error::invalid_visibility(token, format!("denominator: {}", e)))?;

            if denominator == 0 {
                return Err(Error::invalid_visibility(token, "zero denominator"));
            }

            Ok(f64::from(numerator) / f64::from(denominator))
        }
        None => value
            .parse::<f64>()
            .map_err(|e| Error::invalid_visibility(token, e.to_string())),
    }
}

/// Find the first sky-cover group at or after `from`
pub fn parse_sky_condition(tokens: &[&str], from: usize) -> SkyCondition {
    tokens
        .iter()
        .skip(from)
        .find_map(|token| SkyCover::from_prefix(token))
        .map(SkyCondition::new)
        .unwrap_or_default()
}

/// Find the first temperature/dew point group anywhere in the report
pub fn parse_temperature(tokens: &[&str]) -> Result<Temperature> {
    let Some(captures) = tokens
        .iter()
        .find_map(|token| TEMPERATURE_PATTERN.captures(token))
    else {
        return Ok(Temperature::default());
    };

    let token = &captures[0];
    let celsius = parse_signed_celsius(&captures[1], token)?;
    let dew_point = parse_signed_celsius(&captures[2], token)?;

    Ok(Temperature::new(celsius, dew_point))
}

fn parse_signed_celsius(value: &str, token: &str) -> Result<i32> {
    value
        .replacen('M', "-", 1)
        .parse::<i32>()
        .map_err(|e| Error::invalid_temperature(token, e.to_string()))
}

/// Find the first altimeter group (`A` followed by four digits)
///
/// Other `A` tokens, such as the `ALQDS` lightning remark, are not altimeter
/// groups and are skipped.
pub fn parse_pressure(tokens: &[&str]) -> Result<Pressure> {
    let Some(token) = tokens.iter().find(|t| is_altimeter_group(t)) else {
        return Ok(Pressure::default());
    };

    let whole = token
        .get(1..3)
        .and_then(parse_digits)
        .ok_or_else(|| Error::invalid_pressure(*token, "expected two digits of inches"))?;
    let hundredths = token
        .get(3..5)
        .and_then(parse_digits)
        .ok_or_else(|| Error::invalid_pressure(*token, "expected two digits of hundredths"))?;

    Ok(Pressure::new(f64::from(whole) + f64::from(hundredths) / 100.0))
}

fn is_altimeter_group(token: &str) -> bool {
    token.len() == ALTIMETER_TOKEN_LEN
        && token
            .strip_prefix(ALTIMETER_PREFIX)
            .is_some_and(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
}

fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Join every token after `RMK`, or return an empty string
pub fn parse_remarks(tokens: &[&str]) -> String {
    tokens
        .iter()
        .position(|token| *token == REMARKS_MARKER)
        .map(|index| tokens[index + 1..].join(" "))
        .unwrap_or_default()
}

/// Decode present-weather groups between `from` and the first sky-cover group
pub fn parse_phenomena(tokens: &[&str], from: usize) -> Vec<WeatherPhenomenon> {
    tokens
        .iter()
        .skip(from)
        .take_while(|token| SkyCover::from_prefix(token).is_none() && **token != REMARKS_MARKER)
        .filter_map(|token| parse_phenomenon(token))
        .collect()
}

/// Decode a single present-weather token such as `+TSRA`, `-DZ` or `VCSH`
pub fn parse_phenomenon(token: &str) -> Option<WeatherPhenomenon> {
    let (intensity, body) = Intensity::split_prefix(token);

    if body.is_empty() || body.len() % 2 != 0 || !body.is_ascii() {
        return None;
    }

    let codes: Vec<String> = (0..body.len())
        .step_by(2)
        .map(|start| body[start..start + 2].to_string())
        .collect();

    if !codes.iter().all(|code| lookup_tables::is_known_phenomenon(code)) {
        return None;
    }

    let description = intensity
        .label()
        .into_iter()
        .chain(codes.iter().map(|code| lookup_tables::phenomenon_description(code)))
        .collect::<Vec<_>>()
        .join(" ");

    Some(WeatherPhenomenon {
        token: token.to_string(),
        intensity,
        codes,
        description,
    })
}
