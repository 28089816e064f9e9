//! Command-line argument definitions for the METAR decoder
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::FlightCategory;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the METAR decoder
///
/// Decodes aviation routine weather reports into readable summaries with an
/// automatic flight category.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-decoder",
    version,
    about = "Decode METAR aviation weather reports into readable summaries",
    long_about = "Decodes METAR aviation routine weather reports, one per line, into structured \
                  observations. Each report is classified as clear, significant or severe for \
                  visual flight and summarized in plain language. Lines that cannot be decoded \
                  are skipped."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the METAR decoder
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode reports from a file or standard input
    Decode(DecodeArgs),
    /// Print a block of example reports
    Example,
    /// List the known stations and their display names
    Stations(StationsArgs),
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// File containing one report per line
    ///
    /// Reads standard input when omitted or when given as `-`.
    #[arg(value_name = "FILE", help = "File containing one report per line (default: stdin)")]
    pub input: Option<PathBuf>,

    /// Only show reports in this flight category
    #[arg(
        short = 'c',
        long = "category",
        value_name = "CATEGORY",
        help = "Only show reports in this category (clear, significant, severe)"
    )]
    pub category: Option<FlightCategory>,

    /// Output format for decoded reports
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for decoded reports"
    )]
    pub output_format: OutputFormat,

    /// Fail when any line cannot be decoded
    ///
    /// By default undecodable lines are skipped silently. With this flag the
    /// skipped lines are listed on stderr and the command exits with an error.
    #[arg(long = "strict", help = "Fail when any line cannot be decoded")]
    pub strict: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl DecodeArgs {
    /// Get the log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Input file, or `None` for standard input
    pub fn input_file(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

/// Arguments for the stations command
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    /// Output format for the station list
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the station list"
    )]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON format for scripting
    Json,
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
