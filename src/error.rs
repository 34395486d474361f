//! Load-time errors. Everything here is fatal: the dashboard either gets a
//! complete, well-formed dataset at startup or it gets nothing.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading the dashboard source files.
///
/// Aggregation never raises; malformed values are a load-time concern only.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Source file missing or unreadable.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (bad quoting, ragged rows, undecodable field).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row is missing a column the loader needs.
    #[error("{file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    /// Timestamp field that is neither `YYYY-MM-DD HH:MM:SS` nor `YYYY-MM-DD`.
    #[error("unrecognized timestamp '{value}'")]
    InvalidTimestamp { value: String },

    /// Numeric field (e.g. item price) that does not parse.
    #[error("unparseable numeric value '{value}'")]
    InvalidNumber { value: String },
}
