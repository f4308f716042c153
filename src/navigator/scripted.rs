//! Scripted navigator for resolver tests.
//!
//! Each `navigate` call consumes the next script entry; when the script is
//! exhausted, navigation lands on the requested URL with no notifications.
//! Page-ready results are scripted the same way, defaulting to ready.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::config::REDIRECT_EVENT_BUFFER;
use crate::error_handling::NavigatorError;
use crate::navigator::{Navigator, NavigatorFactory, RedirectEvents, RedirectNotification};

/// What one `navigate` call should do.
pub(crate) enum NavigateScript {
    /// Land on `current_url`, emitting `notifications` into the stream.
    Land {
        current_url: String,
        notifications: Vec<(String, u16)>,
    },
    /// Fail with a transient navigation error.
    Fail(String),
}

/// What one `await_page_ready` call should do. Emitting notifications here
/// models redirects that surface while the document is still loading.
pub(crate) struct ReadyScript {
    pub(crate) ready: bool,
    pub(crate) notifications: Vec<(String, u16)>,
}

impl ReadyScript {
    pub(crate) fn not_ready() -> Self {
        ReadyScript {
            ready: false,
            notifications: Vec::new(),
        }
    }

    pub(crate) fn ready_with(notifications: Vec<(String, u16)>) -> Self {
        ReadyScript {
            ready: true,
            notifications,
        }
    }
}

pub(crate) struct ScriptedNavigator {
    navigations: VecDeque<NavigateScript>,
    ready_results: VecDeque<ReadyScript>,
    current_url: String,
    events: Option<mpsc::Sender<RedirectNotification>>,
    navigate_calls: Arc<AtomicUsize>,
}

impl ScriptedNavigator {
    pub(crate) fn new(navigations: Vec<NavigateScript>) -> Self {
        ScriptedNavigator {
            navigations: navigations.into(),
            ready_results: VecDeque::new(),
            current_url: "about:blank".to_string(),
            events: None,
            navigate_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A navigator with no script: every navigation lands on the requested
    /// URL, every page-ready wait succeeds.
    pub(crate) fn idle() -> Self {
        Self::new(Vec::new())
    }

    pub(crate) fn with_ready_results(mut self, results: Vec<ReadyScript>) -> Self {
        self.ready_results = results.into();
        self
    }

    pub(crate) fn navigate_call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.navigate_calls)
    }

    pub(crate) fn subscribed(&self) -> bool {
        self.events.is_some()
    }

    fn emit(&self, location: String, status_code: u16) {
        if let Some(tx) = &self.events {
            let _ = tx.try_send(RedirectNotification {
                location,
                status_code,
            });
        }
    }
}

#[async_trait]
impl Navigator for ScriptedNavigator {
    async fn navigate(&mut self, url: &str) -> Result<(), NavigatorError> {
        self.navigate_calls.fetch_add(1, Ordering::SeqCst);
        match self.navigations.pop_front() {
            Some(NavigateScript::Land {
                current_url,
                notifications,
            }) => {
                for (location, status_code) in notifications {
                    self.emit(location, status_code);
                }
                self.current_url = current_url;
                Ok(())
            }
            Some(NavigateScript::Fail(message)) => Err(NavigatorError::Navigation {
                url: url.to_string(),
                message,
            }),
            None => {
                self.current_url = url.to_string();
                Ok(())
            }
        }
    }

    async fn await_page_ready(&mut self, timeout: Duration) -> Result<bool, NavigatorError> {
        let _ = timeout;
        match self.ready_results.pop_front() {
            Some(script) => {
                for (location, status_code) in script.notifications {
                    self.emit(location, status_code);
                }
                Ok(script.ready)
            }
            None => Ok(true),
        }
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

/// Hands out pre-scripted navigators in order; counts creations so tests can
/// assert on the recreation policy.
pub(crate) struct ScriptedFactory {
    navigators: Mutex<VecDeque<ScriptedNavigator>>,
    created: Arc<AtomicUsize>,
}

impl ScriptedFactory {
    pub(crate) fn new(navigators: Vec<ScriptedNavigator>) -> Self {
        ScriptedFactory {
            navigators: Mutex::new(navigators.into()),
            created: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn created_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.created)
    }
}

#[async_trait]
impl NavigatorFactory for ScriptedFactory {
    type Nav = ScriptedNavigator;

    async fn create(&self) -> Result<ScriptedNavigator, NavigatorError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        let next = self
            .navigators
            .lock()
            .expect("scripted factory lock")
            .pop_front();
        Ok(next.unwrap_or_else(ScriptedNavigator::idle))
    }
}
