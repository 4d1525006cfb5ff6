//! Request generations: the newest search always wins.
//!
//! Every search takes a fresh generation number. Responses and queued
//! requests carrying an older number are stale and get dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared between the UI thread and the worker.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request and return its generation.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_makes_older_stale() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn clones_share_state() {
        let tracker = RequestTracker::new();
        let worker_side = tracker.clone();
        let generation = tracker.begin();
        assert!(worker_side.is_current(generation));
    }
}
