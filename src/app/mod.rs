//! Main application modules.
//!
//! This module provides utilities for destination URL validation and
//! progress logging used by the driver loop.

pub mod logging;
pub mod url;

// Re-export public API
pub use logging::{log_pair_progress, log_run_summary};
pub use url::{destination_host, host_of};
