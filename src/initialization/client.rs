//! HTTP client initialization.
//!
//! This module provides the client used by the HTTP navigator for manual
//! redirect-chain following.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{DEFAULT_USER_AGENT, HTTP_REQUEST_TIMEOUT_SECS};

/// Initializes the shared HTTP client for redirect resolution.
///
/// Creates a `reqwest::Client` with redirects disabled so the navigator can
/// follow the chain manually and observe every intermediate hop, rather than
/// letting the client collapse the chain into its final response.
///
/// # Returns
///
/// A configured HTTP client with redirects disabled.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
