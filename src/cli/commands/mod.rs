//! Command implementations for the METAR decoder CLI
//!
//! Each command is implemented in its own module and writes its output to a
//! caller-supplied writer so it can be driven from tests.

pub mod decode;
pub mod shared;
pub mod stations;

use crate::cli::args::{Args, Commands};
use crate::constants::EXAMPLE_REPORTS;
use crate::{Error, Result};
use std::io::Write;

/// Main command runner for the METAR decoder
///
/// Dispatches to the appropriate subcommand handler:
/// - `decode`: decode reports from a file or stdin
/// - `example`: print the example report block
/// - `stations`: list known stations
pub fn run(args: Args) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Some(Commands::Decode(decode_args)) => {
            shared::setup_logging(decode_args.get_log_level(), decode_args.quiet)?;
            decode::run_decode(&decode_args, &mut out).map(|_| ())
        }
        Some(Commands::Example) => run_example(&mut out),
        Some(Commands::Stations(stations_args)) => {
            stations::run_stations(&stations_args, &mut out)
        }
        None => Err(Error::configuration("No command given")),
    }
}

/// Print the example report block, one report per line
pub fn run_example(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", EXAMPLE_REPORTS)?;
    Ok(())
}
