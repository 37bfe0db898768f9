//! Error types for the itinerary library

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the itinerary library
#[derive(Error, Debug)]
pub enum Error {
    /// A lookup row is missing a required field. The whole table is rejected.
    #[error("Airport lookup malformed: row {row}: {reason}")]
    MalformedLookup { row: usize, reason: String },

    /// Input document does not exist
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Airport lookup file does not exist
    #[error("Airport lookup not found: {}", .0.display())]
    LookupNotFound(PathBuf),

    /// Reading or writing a file failed
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Build a `map_err` adapter that tags an IO error with its file
    pub fn io<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(std::io::Error) -> Self + 'a {
        move |source| Error::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// The short message shown to users of the command-line tool, if the
    /// failure has one. IO failures are reported in full instead.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Error::MalformedLookup { .. } | Error::Csv(_) => Some("Airport lookup malformed"),
            Error::InputNotFound(_) => Some("Input not found"),
            Error::LookupNotFound(_) => Some("Airport lookup not found"),
            Error::Io { .. } => None,
        }
    }
}
