//! Cache Module
//!
//! Local, versioned, TTL-based read cache with per-category expiry
//! policies and explicit invalidation on writes. Expiry is lazy: a stale
//! entry simply reads as a miss until it is overwritten, invalidated or
//! swept by the optional background task.

pub mod backing;
mod category;
mod clock;
mod entry;
mod manager;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use category::{Category, DEFAULT_TTL_MS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use manager::CacheManager;
pub use stats::CacheStats;
