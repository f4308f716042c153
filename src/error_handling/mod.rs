//! Error handling and outcome statistics.
//!
//! This module provides:
//! - Error type definitions for the run-aborting boundaries (input, report,
//!   initialization)
//! - The transient [`NavigatorError`] consumed by the resolver's retry budget
//! - Outcome statistics tracking for the end-of-run summary

mod stats;
mod types;

// Re-export public API
pub use stats::OutcomeStats;
pub use types::{InitializationError, InputError, NavigatorError, ReportError};
