//! HTTP navigator: a reqwest-backed [`Navigator`] implementation.
//!
//! Follows redirect chains manually with a redirects-disabled client so that
//! every intermediate hop is observed and raised as a notification, the way
//! a browser's network instrumentation would report them.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Url;
use tokio::sync::mpsc;

use crate::config::{NAVIGATOR_HOP_CAP, REDIRECT_EVENT_BUFFER};
use crate::error_handling::{InitializationError, NavigatorError};
use crate::initialization::init_redirect_client;
use crate::navigator::{Navigator, NavigatorFactory, RedirectEvents, RedirectNotification};

/// Status codes the navigator treats as redirects worth following.
const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];

/// A [`Navigator`] that drives navigation with a plain HTTP client.
///
/// `navigate` resolves the full redirect chain before returning, so the
/// document is "ready" as soon as navigation completes and notifications for
/// a navigation always precede the next `navigate` call's notifications.
pub struct HttpNavigator {
    client: Arc<reqwest::Client>,
    current_url: String,
    events: Option<mpsc::Sender<RedirectNotification>>,
}

impl HttpNavigator {
    fn emit(&self, notification: RedirectNotification) {
        if let Some(tx) = &self.events {
            if let Err(e) = tx.try_send(notification) {
                warn!("Dropping redirect notification: {e}");
            }
        }
    }
}

#[async_trait]
impl Navigator for HttpNavigator {
    async fn navigate(&mut self, url: &str) -> Result<(), NavigatorError> {
        let mut current = Url::parse(url).map_err(|e| NavigatorError::Navigation {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        for _ in 0..NAVIGATOR_HOP_CAP {
            let resp = self.client.get(current.clone()).send().await.map_err(|e| {
                NavigatorError::Navigation {
                    url: current.to_string(),
                    message: e.to_string(),
                }
            })?;

            let status_code = resp.status().as_u16();
            if !REDIRECT_STATUS_CODES.contains(&status_code) {
                // Not a redirect, we've reached the final URL
                break;
            }

            let Some(loc) = resp.headers().get(reqwest::header::LOCATION) else {
                // Redirect status but no Location header - unusual, log and stop
                warn!("Redirect status {status_code} for {current} but no Location header");
                break;
            };
            let loc = loc.to_str().unwrap_or("").to_string();

            // Location may be relative; resolve it against the redirecting URL
            let next = Url::parse(&loc)
                .or_else(|_| current.join(&loc))
                .map_err(|_| NavigatorError::MalformedHopUrl(loc.clone()))?;

            debug!("Redirect {status_code}: {current} -> {next}");
            self.emit(RedirectNotification {
                location: next.to_string(),
                status_code,
            });
            current = next;
        }

        self.current_url = current.to_string();
        Ok(())
    }

    async fn await_page_ready(&mut self, _timeout: Duration) -> Result<bool, NavigatorError> {
        // A fetched document has no further load phase
        Ok(true)
    }

    fn current_url(&self) -> &str {
        &self.current_url
    }

    fn subscribe(&mut self) -> RedirectEvents {
        let (tx, rx) = mpsc::channel(REDIRECT_EVENT_BUFFER);
        self.events = Some(tx);
        rx
    }

    fn unsubscribe(&mut self) {
        self.events = None;
    }

    async fn quit(&mut self) {
        self.events = None;
    }
}

/// Factory for [`HttpNavigator`]s sharing one configured client.
pub struct HttpNavigatorFactory {
    client: Arc<reqwest::Client>,
}

impl HttpNavigatorFactory {
    /// Builds the factory and its redirects-disabled HTTP client.
    ///
    /// # Arguments
    ///
    /// * `show_browser` - Accepted for CLI compatibility; an HTTP client has
    ///   no window to show
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::HttpClientError`] if the client cannot
    /// be built.
    pub fn new(show_browser: bool) -> Result<Self, InitializationError> {
        if show_browser {
            debug!("show_browser has no effect on the HTTP navigator");
        }
        let client = init_redirect_client()?;
        Ok(HttpNavigatorFactory { client })
    }
}

#[async_trait]
impl NavigatorFactory for HttpNavigatorFactory {
    type Nav = HttpNavigator;

    async fn create(&self) -> Result<HttpNavigator, NavigatorError> {
        Ok(HttpNavigator {
            client: Arc::clone(&self.client),
            current_url: "about:blank".to_string(),
            events: None,
        })
    }
}
