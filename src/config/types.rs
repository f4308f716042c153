//! Configuration types and CLI options.
//!
//! This module defines the command-line surface and the enums used for
//! logger configuration.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_REPORT_PATH;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(s)
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogFormat::Plain => "plain",
            LogFormat::Json => "json",
        };
        f.write_str(s)
    }
}

/// Application configuration, parsed from the command line.
///
/// The positional surface mirrors the operator workflow:
///
/// ```bash
/// redirect_validator url_list.csv         # run with browser hidden
/// redirect_validator url_list.csv 1       # run with browser visible
/// redirect_validator url_list.csv 0 1     # run hidden, then open the report
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "redirect_validator",
    about = "Validates that redirection URLs land on their expected destination domain."
)]
pub struct Config {
    /// Path to the input file: one `redirectionURL,destinationURL` pair per row, no header
    pub input: PathBuf,

    /// Pass 1 to show the browser window (ignored by navigators without one)
    #[arg(default_value_t = 0)]
    pub show_browser: u8,

    /// Pass 1 to open the finished report in the default viewer
    #[arg(default_value_t = 0)]
    pub open_report: u8,

    /// Report output path
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
