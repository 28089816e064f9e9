//! Stations command implementation
//!
//! Lists the station lookup table used for display names.

use crate::app::services::lookup_tables;
use crate::cli::args::{OutputFormat, StationsArgs};
use crate::{Error, Result};
use colored::*;
use serde_json::json;
use std::io::Write;

/// Run the stations command, writing the station list to `out`
pub fn run_stations(args: &StationsArgs, out: &mut dyn Write) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_human_station_list(out),
        OutputFormat::Json => write_json_station_list(out),
    }
}

fn write_human_station_list(out: &mut dyn Write) -> Result<()> {
    let stations = lookup_tables::stations();

    writeln!(out, "{}", "Known Stations".bright_green().bold())?;
    writeln!(out, "==============")?;
    for (code, name) in &stations {
        writeln!(out, "  {}  {}", code.bright_white().bold(), name)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{} stations. Unknown codes are shown as-is.",
        stations.len()
    )?;
    Ok(())
}

fn write_json_station_list(out: &mut dyn Write) -> Result<()> {
    let stations: Vec<_> = lookup_tables::stations()
        .into_iter()
        .map(|(code, name)| json!({ "code": code, "name": name }))
        .collect();

    let json_string = serde_json::to_string_pretty(&stations)
        .map_err(|e| Error::serialization("Failed to serialize station list", e))?;
    writeln!(out, "{}", json_string)?;
    Ok(())
}
