//! Initialization of shared application resources.
//!
//! This module provides logger and HTTP client setup used by the binary and
//! the navigator factory.

mod client;
mod logger;

// Re-export public API
pub use client::init_redirect_client;
pub use logger::init_logger_with;
