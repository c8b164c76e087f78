//! Cache Statistics Module
//!
//! Counters for the cache's silent paths. Corrupt entries and failed
//! writes are swallowed by design; these counters are the only place
//! they remain visible.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Stats Counters ==
/// Live counters, shared across cache manager clones.
#[derive(Debug, Default)]
pub(crate) struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    corrupt_entries: AtomicU64,
    failed_writes: AtomicU64,
    invalidated_entries: AtomicU64,
}

impl StatsCounters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_corrupt(&self) {
        self.corrupt_entries.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failed_write(&self) {
        self.failed_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_invalidated(&self, count: u64) {
        self.invalidated_entries.fetch_add(count, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            corrupt_entries: self.corrupt_entries.load(Ordering::Relaxed),
            failed_writes: self.failed_writes.load(Ordering::Relaxed),
            invalidated_entries: self.invalidated_entries.load(Ordering::Relaxed),
        }
    }
}

// == Cache Stats ==
/// Point-in-time snapshot of cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of fresh cache retrievals
    pub hits: u64,
    /// Number of failed retrievals (absent, expired, or unreadable)
    pub misses: u64,
    /// Number of entries that failed to decode during a read
    pub corrupt_entries: u64,
    /// Number of writes swallowed due to storage failure
    pub failed_writes: u64,
    /// Number of entries removed by category invalidation
    pub invalidated_entries: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
