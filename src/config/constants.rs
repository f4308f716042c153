//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including timeouts, hop limits, retry budgets, and settle delays.

use std::time::Duration;

/// Overall wall-clock deadline for one resolution attempt.
///
/// The deadline is checked once per loop iteration, not preemptively: an
/// iteration already in flight when the deadline passes still completes its
/// bounded waits before the deadline is observed and acted on.
pub const RESOLUTION_TIMEOUT: Duration = Duration::from_secs(15);

/// Maximum number of recorded hops in one chain.
///
/// A chain whose hop count grows past this limit within the deadline is
/// abandoned with a `Skipped Multiple Redirects` outcome.
pub const MAX_REDIRECT_HOPS: usize = 20;

/// Maximum number of resolution attempts per input pair (including the
/// initial attempt). Set to 3 = initial attempt + 2 retries.
pub const RETRY_MAX_ATTEMPTS: usize = 3;

/// Bounded wait for the navigator to report the current document as loaded.
pub const PAGE_READY_TIMEOUT: Duration = Duration::from_secs(30);

// Settle delays around the initial navigation. These let asynchronous
// redirect notifications surface before the chain state is seeded.
/// Pause before issuing the initial navigation.
pub const PRE_NAVIGATE_SETTLE: Duration = Duration::from_millis(1200);
/// Pause between the initial navigation returning and the page-ready wait.
pub const POST_NAVIGATE_SETTLE: Duration = Duration::from_millis(800);
/// Pause after the page-ready wait, before reading the current URL.
pub const POST_READY_SETTLE: Duration = Duration::from_millis(800);

// Settle delays inside the resolution loop.
/// Pause at the top of a loop iteration, before the page-ready wait.
pub const LOOP_PRE_WAIT_SETTLE: Duration = Duration::from_millis(1000);
/// Pause after the in-loop page-ready wait.
pub const LOOP_POST_WAIT_SETTLE: Duration = Duration::from_millis(1000);
/// Pause after re-navigating to the current URL to resolve the next hop.
pub const RENAVIGATE_SETTLE: Duration = Duration::from_millis(1500);

/// Capacity of the per-attempt redirect notification channel.
///
/// Notifications beyond this are dropped with a warning; a chain that deep
/// has already blown far past [`MAX_REDIRECT_HOPS`].
pub const REDIRECT_EVENT_BUFFER: usize = 64;

/// Internal hop cap for the HTTP navigator's manual redirect following.
pub const NAVIGATOR_HOP_CAP: usize = 20;

/// Per-request timeout for the HTTP navigator's client, in seconds.
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP status code treated as "current page, no further redirect pending".
pub const HTTP_STATUS_OK: u16 = 200;

/// Default report output path.
pub const DEFAULT_REPORT_PATH: &str = "_result.csv";

/// Default User-Agent string for the HTTP navigator's requests.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
