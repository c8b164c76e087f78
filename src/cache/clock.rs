//! Clock Module
//!
//! Time source abstraction for the cache. Production code uses the system
//! clock; tests inject a manual clock so TTL boundaries can be checked
//! deterministically instead of sleeping.

use std::sync::atomic::{AtomicU64, Ordering};

// == Clock Trait ==
/// Source of the current time in Unix milliseconds.
pub trait Clock: Send + Sync {
    /// Returns the current Unix timestamp in milliseconds.
    fn now_ms(&self) -> u64;
}

// == System Clock ==
/// Wall-clock time source.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        chrono::Utc::now().timestamp_millis() as u64
    }
}

// == Manual Clock ==
/// A clock that only moves when told to. Intended for tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicU64,
}

impl ManualClock {
    /// Creates a manual clock starting at the given instant.
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms: AtomicU64::new(now_ms),
        }
    }

    /// Advances the clock by the given number of milliseconds.
    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }

    /// Sets the clock to an absolute instant.
    pub fn set(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_plausible() {
        // Any date after 2020-01-01 counts as a working clock here.
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn test_manual_clock_advance_and_set() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_ms(), 1_000);

        clock.advance(500);
        assert_eq!(clock.now_ms(), 1_500);

        clock.set(10);
        assert_eq!(clock.now_ms(), 10);
    }
}
