//! Outcome statistics tracking.
//!
//! Tallies how many input pairs finished in each resolution outcome so the
//! run can log a per-status breakdown at the end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use strum::IntoEnumIterator;

use crate::resolver::ResolutionStatus;

/// Per-outcome counters for one validation run.
///
/// All outcome kinds are initialized to zero on creation. Counters are
/// atomic so the struct can be shared behind an `Arc` if the driver loop is
/// ever parallelized; today a single worker increments them sequentially.
pub struct OutcomeStats {
    counts: HashMap<ResolutionStatus, AtomicUsize>,
}

impl OutcomeStats {
    /// Creates a tracker with every outcome kind at zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for status in ResolutionStatus::iter() {
            counts.insert(status, AtomicUsize::new(0));
        }
        OutcomeStats { counts }
    }

    /// Records one finished pair.
    pub fn record(&self, status: ResolutionStatus) {
        if let Some(counter) = self.counts.get(&status) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record outcome {:?} which is not in the map. \
                 This indicates a bug in OutcomeStats initialization.",
                status
            );
        }
    }

    /// Returns the count recorded for one outcome kind.
    pub fn count(&self, status: ResolutionStatus) -> usize {
        self.counts
            .get(&status)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Total pairs recorded across all outcome kinds.
    pub fn total(&self) -> usize {
        ResolutionStatus::iter().map(|s| self.count(s)).sum()
    }

    /// Logs a breakdown of non-zero outcome counts.
    pub fn log_summary(&self) {
        let mut any = false;
        for status in ResolutionStatus::iter() {
            let count = self.count(status);
            if count > 0 {
                info!("  {}: {}", status, count);
                any = true;
            }
        }
        if !any {
            info!("  (no pairs processed)");
        }
    }
}

impl Default for OutcomeStats {
    fn default() -> Self {
        Self::new()
    }
}
