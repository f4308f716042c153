//! Redirect chain resolution: the core engine.
//!
//! Given one input pair, the resolver drives navigation through a chain of
//! HTTP redirects, correlates the navigator's asynchronous redirect
//! notifications with navigation state, applies the timeout/hop-limit/retry
//! policy, and classifies the terminal outcome deterministically.
//!
//! Every per-pair error is contained here: the driver loop receives a
//! [`ResolutionResult`] for every pair, never an error. Transient navigator
//! failures consume the retry budget and force navigator recreation; when
//! the budget is exhausted the pair is classified `Unprocessed`.

mod chain;
mod outcome;

pub use chain::RedirectHop;
pub use outcome::{ResolutionResult, ResolutionStatus};

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use tokio::time::sleep;

use crate::app::url::{destination_host, host_of};
use crate::config::{
    HTTP_STATUS_OK, LOOP_POST_WAIT_SETTLE, LOOP_PRE_WAIT_SETTLE, MAX_REDIRECT_HOPS,
    PAGE_READY_TIMEOUT, POST_NAVIGATE_SETTLE, POST_READY_SETTLE, PRE_NAVIGATE_SETTLE,
    RENAVIGATE_SETTLE, RESOLUTION_TIMEOUT, RETRY_MAX_ATTEMPTS,
};
use crate::error_handling::NavigatorError;
use crate::input::InputPair;
use crate::navigator::{Navigator, NavigatorFactory, NavigatorSlot, RedirectEvents};

use chain::ChainState;

/// Tunables for the resolution algorithm.
///
/// `Default` carries the production constants; tests shrink the delays to
/// keep scenarios fast. Making the retry budget and limits explicit
/// parameters keeps them visible and testable.
#[derive(Debug, Clone)]
pub struct ResolverPolicy {
    /// Overall wall-clock deadline per attempt.
    pub resolution_timeout: Duration,
    /// Hop count above which a chain is abandoned.
    pub max_hops: usize,
    /// Total attempts per pair (initial + retries).
    pub max_attempts: usize,
    /// Bounded page-ready wait.
    pub page_ready_timeout: Duration,
    /// Pause before the initial navigation.
    pub pre_navigate_settle: Duration,
    /// Pause after the initial navigation returns.
    pub post_navigate_settle: Duration,
    /// Pause after the initial page-ready wait.
    pub post_ready_settle: Duration,
    /// Pause at the top of each loop iteration.
    pub loop_pre_wait_settle: Duration,
    /// Pause after the in-loop page-ready wait.
    pub loop_post_wait_settle: Duration,
    /// Pause after re-navigating to the current URL.
    pub renavigate_settle: Duration,
}

impl Default for ResolverPolicy {
    fn default() -> Self {
        ResolverPolicy {
            resolution_timeout: RESOLUTION_TIMEOUT,
            max_hops: MAX_REDIRECT_HOPS,
            max_attempts: RETRY_MAX_ATTEMPTS,
            page_ready_timeout: PAGE_READY_TIMEOUT,
            pre_navigate_settle: PRE_NAVIGATE_SETTLE,
            post_navigate_settle: POST_NAVIGATE_SETTLE,
            post_ready_settle: POST_READY_SETTLE,
            loop_pre_wait_settle: LOOP_PRE_WAIT_SETTLE,
            loop_post_wait_settle: LOOP_POST_WAIT_SETTLE,
            renavigate_settle: RENAVIGATE_SETTLE,
        }
    }
}

/// How one attempt ended, short of a transient error.
enum AttemptOutcome {
    /// The chain terminated; classify success/failure from the last hop.
    Terminal {
        success: bool,
        final_domain: String,
        final_url: String,
        status_code: u16,
        trace: String,
    },
    /// The deadline elapsed before the chain terminated.
    DeadlineExceeded { final_domain: String },
    /// The hop limit was exceeded before the deadline.
    HopLimitExceeded { final_domain: String },
}

/// Resolves one input pair to its output record.
///
/// Infallible: the precondition-failure, timeout, hop-limit,
/// terminal, and exhausted-retries paths each produce a result, and those
/// paths are mutually exclusive and collectively exhaustive.
///
/// # Arguments
///
/// * `pair` - The input pair to resolve
/// * `index` - 1-based position of the pair in the input file
/// * `slot` - The navigator slot; recycled on every failed attempt
/// * `policy` - Timeout/hop-limit/retry tunables
pub async fn resolve_pair<F: NavigatorFactory>(
    pair: &InputPair,
    index: usize,
    slot: &mut NavigatorSlot<F>,
    policy: &ResolverPolicy,
) -> ResolutionResult {
    let mut result = ResolutionResult::new(index, pair);

    // Precondition: a malformed destination short-circuits before any
    // navigator interaction.
    let Some(dest_host) = destination_host(&pair.destination_url) else {
        warn!(
            "Destination URL is not a well-formed absolute URL: {}",
            pair.destination_url
        );
        result.status = ResolutionStatus::UrlFormatIncorrect;
        return result;
    };
    result.destination_domain = dest_host.clone();

    for attempt in 1..=policy.max_attempts {
        let nav = match slot.ensure().await {
            Ok(nav) => nav,
            Err(e) => {
                warn!("Attempt {attempt}: navigator unavailable: {e}");
                continue;
            }
        };

        let attempt_result = run_attempt(nav, pair, &dest_host, attempt, policy).await;
        match attempt_result {
            Ok(outcome) => {
                apply_outcome(&mut result, outcome);
                return result;
            }
            Err(e) => {
                warn!(
                    "Attempt {attempt} failed for {}: {e}",
                    pair.redirection_url
                );
                if let Err(recycle_err) = slot.recycle().await {
                    warn!("Failed to recreate navigator: {recycle_err}");
                }
            }
        }
    }

    info!(
        "Retries exhausted for {} after {} attempts",
        pair.redirection_url, policy.max_attempts
    );
    // result.status is still Unprocessed from construction
    result
}

fn apply_outcome(result: &mut ResolutionResult, outcome: AttemptOutcome) {
    match outcome {
        AttemptOutcome::Terminal {
            success,
            final_domain,
            final_url,
            status_code,
            trace,
        } => {
            result.status = if success {
                ResolutionStatus::Success
            } else {
                ResolutionStatus::Failure
            };
            result.final_domain = final_domain;
            result.final_url = final_url;
            result.status_code = status_code.to_string();
            result.redirects_trace = trace;
        }
        AttemptOutcome::DeadlineExceeded { final_domain } => {
            result.status = ResolutionStatus::SkippedTimeout;
            result.final_domain = final_domain;
        }
        AttemptOutcome::HopLimitExceeded { final_domain } => {
            result.status = ResolutionStatus::SkippedMultipleRedirects;
            result.final_domain = final_domain;
        }
    }
}

/// Runs one attempt with the subscribe/unsubscribe pairing the notification
/// stream requires: the subscription never outlives the attempt, so a later
/// pair cannot observe stale events.
async fn run_attempt<N: Navigator>(
    nav: &mut N,
    pair: &InputPair,
    dest_host: &str,
    attempt: usize,
    policy: &ResolverPolicy,
) -> Result<AttemptOutcome, NavigatorError> {
    let mut events = nav.subscribe();
    let outcome = drive_chain(nav, &mut events, pair, dest_host, attempt, policy).await;
    nav.unsubscribe();
    outcome
}

async fn drive_chain<N: Navigator>(
    nav: &mut N,
    events: &mut RedirectEvents,
    pair: &InputPair,
    dest_host: &str,
    attempt: usize,
    policy: &ResolverPolicy,
) -> Result<AttemptOutcome, NavigatorError> {
    let deadline = Instant::now() + policy.resolution_timeout;

    sleep(policy.pre_navigate_settle).await;
    nav.navigate(&pair.redirection_url).await?;
    sleep(policy.post_navigate_settle).await;

    // Notifications raised by the navigation call itself describe hops the
    // navigator has already folded into its current URL; the chain starts at
    // where we landed, so they are logged and dropped rather than recorded.
    // Anything surfacing from here on is still in flight and belongs to the
    // chain.
    let mut discarded = 0;
    while let Ok(notification) = events.try_recv() {
        debug!(
            "Pre-capture redirect {} -> {} ({})",
            pair.redirection_url, notification.location, notification.status_code
        );
        discarded += 1;
    }
    if discarded > 0 {
        debug!("Discarded {discarded} pre-capture notifications (attempt {attempt})");
    }

    if !nav.await_page_ready(policy.page_ready_timeout).await? {
        return Err(NavigatorError::PageReadyTimeout(policy.page_ready_timeout));
    }
    sleep(policy.post_ready_settle).await;

    let mut chain = ChainState::begin(
        nav.current_url().to_string(),
        dest_host.to_string(),
        deadline,
        attempt,
    );

    loop {
        chain.absorb(events);
        let last = chain.last().clone();
        let last_host =
            host_of(&last.url).ok_or_else(|| NavigatorError::MalformedHopUrl(last.url.clone()))?;

        if last_host != chain.destination_host && last.status_code != HTTP_STATUS_OK {
            // A redirect is still pending. Give the page time to load, then
            // check the attempt's budget before chasing the next hop.
            sleep(policy.loop_pre_wait_settle).await;
            if !nav.await_page_ready(policy.page_ready_timeout).await? {
                return Err(NavigatorError::PageReadyTimeout(policy.page_ready_timeout));
            }
            sleep(policy.loop_post_wait_settle).await;
            chain.absorb(events);

            if Instant::now() > chain.deadline {
                info!(
                    "Skipped {} - deadline of {:?} reached",
                    pair.redirection_url, policy.resolution_timeout
                );
                return Ok(AttemptOutcome::DeadlineExceeded {
                    final_domain: last_host,
                });
            }

            if chain.len() > policy.max_hops {
                info!(
                    "Skipped {} - more than {} redirects",
                    pair.redirection_url, policy.max_hops
                );
                return Ok(AttemptOutcome::HopLimitExceeded {
                    final_domain: last_host,
                });
            }

            let next = nav.current_url().to_string();
            nav.navigate(&next).await?;
            sleep(policy.renavigate_settle).await;
        } else {
            // Termination is driven by host+status match only: a chain that
            // stalls on a wrong host with status 200 is a Failure, as is one
            // whose last observed response was a redirect into the
            // destination host.
            let success =
                last_host == chain.destination_host && last.status_code == HTTP_STATUS_OK;
            debug!(
                "Chain terminal for {} at {} ({}) after {} hop(s), attempt {}",
                pair.redirection_url,
                last.url,
                last.status_code,
                chain.len(),
                chain.attempt
            );
            return Ok(AttemptOutcome::Terminal {
                success,
                final_domain: last_host,
                final_url: last.url,
                status_code: last.status_code,
                trace: chain.serialize_trace(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
