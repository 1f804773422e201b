// error.rs - Error kinds surfaced by validation and rendering

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PivotError {
    #[error("Malformed header: {reason}")]
    MalformedHeader { reason: String },

    #[error("Submitter \"{value}\" at line {line} does not follow GitHub rules")]
    InvalidIdentifier { line: usize, value: String },

    #[error("Value \"{value}\" at line {line} (column {column}) isn't an integer")]
    InvalidCount {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Line #{line} has {found} columns while expecting {expected}")]
    ColumnCountMismatch {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("I/O failure on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The directory of specified output file ({}) does not exist", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input file '{}' (missing or a directory)", .path.display())]
    InvalidInput { path: PathBuf },

    #[error("Supplied month ({value}) is not valid. Should be \"YYYY-MM\" (2010 or later) or \"latest\"")]
    InvalidMonth { value: String },

    #[error("Period column {value} is not present in the table")]
    UnknownPeriod { value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PivotError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PivotError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PivotError>;
