//! Itinerary prettifier CLI tool
//!
//! Reads a coded itinerary and an airport lookup table, and writes a
//! customer-friendly itinerary.

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use itinerary::run::{prettify_file, RunOptions};

/// Itinerary prettifier - turn coded itineraries into customer-friendly text
#[derive(Parser)]
#[command(name = "itinerary")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Prettify an itinerary
    itinerary ./input.txt ./output.txt ./airport-lookup.csv

    # Also print the result and show what happened
    itinerary -v --stdout ./input.txt ./output.txt ./airport-lookup.csv")]
struct Cli {
    /// Coded itinerary text file
    input: PathBuf,

    /// Output file for the prettified itinerary
    output: PathBuf,

    /// Airport lookup CSV (name, country, city, ICAO code, IATA code)
    lookup: PathBuf,

    /// Also print the prettified itinerary to stdout
    #[arg(long)]
    stdout: bool,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = cmd_prettify(cli) {
        match e.downcast_ref::<itinerary::Error>().and_then(|err| {
            log::debug!("{}", err);
            err.user_message()
        }) {
            Some(message) => eprintln!("{}", message),
            None => eprintln!("Error: {:#}", e),
        }
        process::exit(1);
    }
}

/// Prettify one itinerary file
fn cmd_prettify(cli: Cli) -> anyhow::Result<()> {
    let options = RunOptions {
        input_path: cli.input,
        output_path: cli.output,
        lookup_path: cli.lookup,
    };

    let summary = prettify_file(&options)?;

    log::info!(
        "{} bytes in, {} bytes out",
        summary.input_bytes,
        summary.output_bytes
    );

    if cli.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(summary.output.as_bytes())
            .context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
    }

    Ok(())
}
