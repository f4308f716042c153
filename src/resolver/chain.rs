//! Per-attempt redirect chain state.

use std::time::Instant;

use crate::navigator::RedirectEvents;

/// One observed location in a redirect chain, in observation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectHop {
    /// Absolute URL of the hop.
    pub url: String,
    /// Status code observed for the hop. The synthetic first hop carries
    /// 200, meaning "current page, no further redirect pending".
    pub status_code: u16,
}

/// State owned by exactly one in-flight resolution attempt.
///
/// A retry starts a **new** `ChainState`: partial hop history from a failed
/// attempt is discarded, never merged. Within one attempt the hop list only
/// grows.
#[derive(Debug)]
pub(crate) struct ChainState {
    hops: Vec<RedirectHop>,
    /// Host the chain must terminate on; derived once per pair.
    pub destination_host: String,
    /// Wall-clock deadline for this attempt.
    pub deadline: Instant,
    /// 1-based attempt number, for logging.
    pub attempt: usize,
}

impl ChainState {
    /// Seeds the chain with the synthetic first hop: the URL the navigator
    /// landed on, with status 200.
    pub(crate) fn begin(
        landed_url: String,
        destination_host: String,
        deadline: Instant,
        attempt: usize,
    ) -> Self {
        ChainState {
            hops: vec![RedirectHop {
                url: landed_url,
                status_code: 200,
            }],
            destination_host,
            deadline,
            attempt,
        }
    }

    /// Drains every pending notification into the hop list, preserving
    /// arrival order. Returns how many were absorbed.
    pub(crate) fn absorb(&mut self, events: &mut RedirectEvents) -> usize {
        let mut absorbed = 0;
        while let Ok(notification) = events.try_recv() {
            self.hops.push(RedirectHop {
                url: notification.location,
                status_code: notification.status_code,
            });
            absorbed += 1;
        }
        absorbed
    }

    /// The most recently observed hop. The synthetic first hop guarantees
    /// the list is never empty.
    pub(crate) fn last(&self) -> &RedirectHop {
        self.hops.last().expect("chain seeded with synthetic hop")
    }

    /// Number of recorded hops.
    pub(crate) fn len(&self) -> usize {
        self.hops.len()
    }

    /// Serializes the chain as `url|status` pairs joined by `|`, preserving
    /// observation order.
    pub(crate) fn serialize_trace(&self) -> String {
        self.hops
            .iter()
            .map(|h| format!("{}|{}", h.url, h.status_code))
            .collect::<Vec<_>>()
            .join("|")
    }
}
