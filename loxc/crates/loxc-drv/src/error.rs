//! Error types for the loxc driver.
//!
//! Lexical problems are not errors here: they are part of a scan's output
//! and only affect the exit status. `DrvError` covers the failures that stop
//! the driver before or after a scan.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the loxc driver.
#[derive(Error, Debug)]
pub enum DrvError {
    /// A configuration file was missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a source file failed.
    #[error("Failed to read {}: {source}", path.display())]
    ReadSource {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O failure, such as writing the listing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;
