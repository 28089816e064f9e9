use anyhow::Context;
use clap::Parser;
use metar_decoder::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let result = commands::run(args).context("metar-decoder failed");

    if let Err(error) = result {
        // Error occurred - print to stderr and exit with error code
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("METAR Decoder - Aviation Weather Report Decoder");
    println!("===============================================");
    println!();
    println!("Decode METAR aviation routine weather reports into readable summaries");
    println!("and classify each observation as clear, significant or severe.");
    println!();
    println!("USAGE:");
    println!("    metar-decoder <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    decode      Decode reports from a file or standard input (main command)");
    println!("    example     Print a block of example reports");
    println!("    stations    List the known stations and their display names");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Decode the built-in example reports:");
    println!("    metar-decoder example | metar-decoder decode");
    println!();
    println!("    # Show only severe reports from a file as JSON:");
    println!("    metar-decoder decode reports.txt --category severe --format json");
    println!();
    println!("    # Fail when any line cannot be decoded:");
    println!("    metar-decoder decode reports.txt --strict");
    println!();
    println!("For detailed help on any command, use:");
    println!("    metar-decoder <COMMAND> --help");
}
