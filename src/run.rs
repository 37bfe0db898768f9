//! File-level pipeline: load the lookup table, prettify the input, write the
//! output.

use std::path::PathBuf;

use log::info;

use crate::error::{Error, Result};
use crate::lookup::load_lookup;
use crate::substitute::prettify;

/// Options for prettifying an itinerary file
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Coded itinerary to read
    pub input_path: PathBuf,
    /// Where the prettified itinerary is written
    pub output_path: PathBuf,
    /// Airport lookup CSV
    pub lookup_path: PathBuf,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Distinct airport codes in the lookup table
    pub codes_loaded: usize,
    pub input_bytes: usize,
    pub output_bytes: usize,
    /// The prettified document
    pub output: String,
}

/// Prettify an itinerary file
///
/// Both inputs are checked before anything is read, and the output file is
/// only created once the lookup table has loaded cleanly.
///
/// # Example
///
/// ```no_run
/// use itinerary::run::{prettify_file, RunOptions};
/// use std::path::PathBuf;
///
/// let options = RunOptions {
///     input_path: PathBuf::from("input.txt"),
///     output_path: PathBuf::from("output.txt"),
///     lookup_path: PathBuf::from("airport-lookup.csv"),
/// };
///
/// prettify_file(&options).expect("Failed to prettify itinerary");
/// ```
pub fn prettify_file(options: &RunOptions) -> Result<RunSummary> {
    if !options.input_path.exists() {
        return Err(Error::InputNotFound(options.input_path.clone()));
    }
    if !options.lookup_path.exists() {
        return Err(Error::LookupNotFound(options.lookup_path.clone()));
    }

    let lookup = load_lookup(&options.lookup_path)?;
    info!(
        "Loaded {} airport codes from {}",
        lookup.len(),
        options.lookup_path.display()
    );

    let bytes = std::fs::read(&options.input_path)
        .map_err(Error::io("read", &options.input_path))?;
    let input = String::from_utf8_lossy(&bytes);
    let output = prettify(&input, &lookup);

    std::fs::write(&options.output_path, &output)
        .map_err(Error::io("write", &options.output_path))?;
    info!("Wrote {}", options.output_path.display());

    Ok(RunSummary {
        codes_loaded: lookup.len(),
        input_bytes: bytes.len(),
        output_bytes: output.len(),
        output,
    })
}
