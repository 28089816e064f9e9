//! Shared components for CLI commands
//!
//! This module contains logging setup, input reading and output helpers used
//! across multiple CLI command implementations.

use crate::app::models::FlightCategory;
use crate::{Error, Result};
use colored::*;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Set up structured logging for the decoder commands
///
/// `RUST_LOG` takes precedence over the level derived from the CLI flags.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_decoder={}", log_level)));

    let result = if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read report text from a file, or from standard input when no file is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading reports from {}", path.display());
            std::fs::read_to_string(path)
                .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
        }
        None => {
            debug!("Reading reports from standard input");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| Error::io("Failed to read standard input", e))?;
            Ok(text)
        }
    }
}

/// Category label coloured by severity
pub fn colored_category(category: FlightCategory) -> ColoredString {
    match category {
        FlightCategory::Clear => category.label().bright_green().bold(),
        FlightCategory::Significant => category.label().bright_yellow().bold(),
        FlightCategory::Severe => category.label().bright_red().bold(),
    }
}
