//! Navigator abstraction.
//!
//! A navigator is the external client that actually drives HTTP navigation:
//! it loads URLs, reports when the current document has finished loading,
//! and raises an out-of-band notification for every response that carries a
//! redirect `Location` header. The resolver consumes this trait; the
//! production implementation is [`HttpNavigator`], and tests script one.
//!
//! Notifications are **not synchronized** with `navigate`/`await_page_ready`
//! calls. They are delivered through a bounded per-attempt channel so that
//! subscribe/unsubscribe boundaries are explicit and a later pair can never
//! observe a stale event from an earlier one.

mod http;
#[cfg(test)]
pub(crate) mod scripted;

pub use http::{HttpNavigator, HttpNavigatorFactory};

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error_handling::NavigatorError;

/// One out-of-band redirect observation: the `Location` target of a
/// redirecting response and that response's status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectNotification {
    /// Absolute URL the response redirected to.
    pub location: String,
    /// Status code of the redirecting response (301, 302, ...).
    pub status_code: u16,
}

/// Receiving half of a per-attempt redirect notification stream.
pub type RedirectEvents = mpsc::Receiver<RedirectNotification>;

/// A client capable of navigating URLs and reporting redirect responses.
///
/// One navigator is owned by the driver loop and handed to exactly one
/// in-flight resolution attempt at a time. Implementations may become
/// unusable after repeated failures; the owner discards and recreates them
/// through a [`NavigatorFactory`].
#[async_trait]
pub trait Navigator: Send {
    /// Requests that the client load `url`. May itself trigger zero or more
    /// redirect notifications before returning or shortly after.
    async fn navigate(&mut self, url: &str) -> Result<(), NavigatorError>;

    /// Waits until the current document signals load-complete, or `timeout`
    /// elapses. A timeout returns `Ok(false)`; it is not an error at this
    /// boundary.
    async fn await_page_ready(&mut self, timeout: Duration) -> Result<bool, NavigatorError>;

    /// The URL the client currently reports as loaded.
    fn current_url(&self) -> &str;

    /// Opens a fresh notification stream for one resolution attempt.
    ///
    /// Any previous stream is implicitly closed; events raised before this
    /// call are never delivered on the new stream.
    fn subscribe(&mut self) -> RedirectEvents;

    /// Closes the current notification stream. Must be paired with
    /// [`subscribe`](Navigator::subscribe) on every attempt exit.
    fn unsubscribe(&mut self);

    /// Releases the client's resources.
    async fn quit(&mut self);
}

/// Creates navigators; the recreation seam for the retry policy.
#[async_trait]
pub trait NavigatorFactory: Send {
    /// The navigator type this factory produces.
    type Nav: Navigator;

    /// Creates a fresh navigator.
    async fn create(&self) -> Result<Self::Nav, NavigatorError>;
}

/// Owns the live navigator together with its factory.
///
/// The driver loop holds one slot for the whole run; the resolver borrows it
/// so a failed attempt can discard the navigator and start the next attempt
/// on a fresh one without the driver mediating.
pub struct NavigatorSlot<F: NavigatorFactory> {
    factory: F,
    navigator: Option<F::Nav>,
}

impl<F: NavigatorFactory> NavigatorSlot<F> {
    /// Creates the slot and its initial navigator.
    pub async fn new(factory: F) -> Result<Self, NavigatorError> {
        let navigator = factory.create().await?;
        Ok(NavigatorSlot {
            factory,
            navigator: Some(navigator),
        })
    }

    /// Returns the live navigator, creating one if the slot is empty.
    pub async fn ensure(&mut self) -> Result<&mut F::Nav, NavigatorError> {
        if self.navigator.is_none() {
            self.navigator = Some(self.factory.create().await?);
        }
        // Just populated above; cannot be None here.
        Ok(self.navigator.as_mut().expect("navigator slot populated"))
    }

    /// Discards the current navigator and creates a fresh one.
    ///
    /// On creation failure the slot is left empty; the next
    /// [`ensure`](NavigatorSlot::ensure) retries creation.
    pub async fn recycle(&mut self) -> Result<(), NavigatorError> {
        if let Some(mut old) = self.navigator.take() {
            old.quit().await;
        }
        self.navigator = Some(self.factory.create().await?);
        Ok(())
    }

    /// The live navigator, if any. Used by tests to inspect state.
    pub fn current(&mut self) -> Option<&mut F::Nav> {
        self.navigator.as_mut()
    }

    /// Quits and drops the navigator at the end of the run.
    pub async fn shutdown(&mut self) {
        if let Some(mut nav) = self.navigator.take() {
            nav.quit().await;
        }
    }
}
