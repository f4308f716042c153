//! Error type definitions.
//!
//! This module defines all error types used throughout the application.
//! Per-pair failures are contained by the resolver and never surface here;
//! these types cover the boundaries that abort a run (input, report,
//! initialization) and the transient navigator failures consumed by the
//! retry budget.

use std::path::PathBuf;
use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for the input reader. Both variants abort the whole run.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input path does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The input file could not be read.
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// A row did not parse as a two-column record. Rows are 1-based.
    #[error("Malformed input row {row}: {message}")]
    Parse {
        /// 1-based row number of the offending record.
        row: usize,
        /// Parser diagnostic for the row.
        message: String,
    },
}

/// Transient navigator failures.
///
/// Every variant is recoverable via the resolver's retry policy: the attempt
/// is abandoned, the navigator is recreated, and the chain restarts from a
/// fresh state until the retry budget is exhausted.
#[derive(Error, Debug)]
pub enum NavigatorError {
    /// The navigation request itself failed (connection, DNS, protocol).
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL the navigation was issued against.
        url: String,
        /// Client diagnostic.
        message: String,
    },

    /// The page-ready wait expired without the document loading.
    #[error("Page-ready wait timed out after {0:?}")]
    PageReadyTimeout(Duration),

    /// The navigator session became unusable and must be recreated.
    #[error("Navigator session lost: {0}")]
    SessionLost(String),

    /// An observed hop URL could not be parsed.
    #[error("Unparseable hop URL: {0}")]
    MalformedHopUrl(String),
}

/// Error types for the report writer. Fatal for the run.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report file could not be created.
    #[error("Failed to create report file {}: {source}", .path.display())]
    Create {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A row (or the header) could not be serialized.
    #[error("Failed to write report row: {0}")]
    Csv(#[from] csv::Error),

    /// The report file could not be flushed to disk.
    #[error("Failed to flush report: {0}")]
    Io(#[from] std::io::Error),
}
