//! Recent-failure tracking for icon URLs
//!
//! Loaders record URLs that failed to fetch or decode; the known-failure
//! preparer drops candidates still inside the TTL window so a broken icon
//! URL is not re-fetched on every page visit. Entries expire lazily on
//! lookup, append/expire only.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use log::debug;

/// Tracks icon URLs that recently failed to load
pub struct FailureTracker {
    failures: DashMap<String, Instant>,
    ttl: Duration,
}

impl FailureTracker {
    /// Create a tracker whose entries expire after `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            failures: DashMap::new(),
            ttl,
        }
    }

    /// Whether this URL failed within the TTL window
    ///
    /// Expired entries are removed as a side effect of the check.
    pub fn is_recent_failure(&self, icon_url: &str) -> bool {
        // The read guard must be released before removing, or the shard
        // lock is taken twice.
        let recent = match self.failures.get(icon_url) {
            Some(recorded) => recorded.elapsed() < self.ttl,
            None => return false,
        };
        if !recent {
            self.failures.remove(icon_url);
        }
        recent
    }

    /// Record that this URL just failed to load
    pub fn record_failure(&self, icon_url: &str) {
        debug!("Recording icon load failure for {icon_url}");
        self.failures.insert(icon_url.to_string(), Instant::now());
    }

    /// Number of currently tracked failures, including not-yet-expired ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_failure_is_recent() {
        let tracker = FailureTracker::new(Duration::from_secs(60));
        assert!(!tracker.is_recent_failure("https://example.com/icon.png"));

        tracker.record_failure("https://example.com/icon.png");
        assert!(tracker.is_recent_failure("https://example.com/icon.png"));
        assert!(!tracker.is_recent_failure("https://example.com/other.png"));
    }

    #[test]
    fn test_failures_expire_after_ttl() {
        let tracker = FailureTracker::new(Duration::from_millis(20));
        tracker.record_failure("https://example.com/icon.png");

        std::thread::sleep(Duration::from_millis(40));
        assert!(!tracker.is_recent_failure("https://example.com/icon.png"));
        // The expired entry was dropped by the lookup.
        assert!(tracker.is_empty());
    }
}
