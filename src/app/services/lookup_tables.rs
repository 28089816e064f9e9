//! Read-only reference tables for report decoding
//!
//! Maps station identifiers to display names, sky-cover and present-weather
//! codes to descriptions, and wind directions to compass points. The station
//! index is built once on first use and never mutated afterwards.
//!
//! Unknown keys never fail: station lookups fall back to the identifier itself
//! and code lookups fall back to [`UNKNOWN_DESCRIPTION`].

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Description returned for codes that are not in a table
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Known stations and their display names
pub const STATION_NAMES: &[(&str, &str)] = &[
    ("KRIC", "Richmond International Airport"),
    ("KJFK", "John F. Kennedy International Airport"),
    ("KSFO", "San Francisco International Airport"),
    ("KORD", "O'Hare International Airport"),
    ("KDEN", "Denver International Airport"),
    ("KBOS", "Logan International Airport"),
    ("KLAX", "Los Angeles International Airport"),
    ("KMIA", "Miami International Airport"),
    ("EGLL", "London Heathrow Airport"),
    ("LFPG", "Paris Charles de Gaulle Airport"),
];

/// Sky-cover codes and their descriptions
pub const SKY_CONDITIONS: &[(&str, &str)] = &[
    ("CLR", "Clear"),
    ("SKC", "Sky Clear"),
    ("FEW", "Few Clouds"),
    ("SCT", "Scattered Clouds"),
    ("BKN", "Broken Clouds"),
    ("OVC", "Overcast"),
    ("VV", "Vertical Visibility"),
];

/// Present-weather codes and their descriptions
pub const WEATHER_PHENOMENA: &[(&str, &str)] = &[
    ("RA", "Rain"),
    ("SN", "Snow"),
    ("TS", "Thunderstorm"),
    ("FG", "Fog"),
    ("BR", "Mist"),
    ("HZ", "Haze"),
    ("DZ", "Drizzle"),
    ("PL", "Ice Pellets"),
    ("GR", "Hail"),
    ("SH", "Showers"),
];

/// Sixteen-point compass, clockwise from north
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

lazy_static! {
    static ref STATION_INDEX: HashMap<&'static str, &'static str> =
        STATION_NAMES.iter().copied().collect();
}

/// Display name of a station, or the identifier itself when unknown
pub fn station_name(code: &str) -> &str {
    STATION_INDEX.get(code).copied().unwrap_or(code)
}

/// All known stations sorted by identifier
pub fn stations() -> Vec<(&'static str, &'static str)> {
    let mut stations = STATION_NAMES.to_vec();
    stations.sort_by_key(|(code, _)| *code);
    stations
}

/// Description of a sky-cover code
pub fn sky_description(code: &str) -> &'static str {
    find_description(SKY_CONDITIONS, code).unwrap_or(UNKNOWN_DESCRIPTION)
}

/// Description of a present-weather code
pub fn phenomenon_description(code: &str) -> &'static str {
    find_description(WEATHER_PHENOMENA, code).unwrap_or(UNKNOWN_DESCRIPTION)
}

/// Whether the two-letter code is a known present-weather code
pub fn is_known_phenomenon(code: &str) -> bool {
    find_description(WEATHER_PHENOMENA, code).is_some()
}

/// Nearest sixteen-point compass label for a direction in degrees
pub fn compass_label(degrees: u16) -> &'static str {
    let index = (f64::from(degrees) / 22.5).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

fn find_description(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, description)| *description)
}
