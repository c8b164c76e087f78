//! Cache Entry Module
//!
//! Defines the unit stored per key and its string codec. The wire form is
//! the JSON object `{ "data": ..., "timestamp": ..., "type": ... }`, where
//! `timestamp` is the write time in Unix milliseconds and `type` is the
//! category tag used for TTL selection and bulk invalidation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::Category;

// == Cache Entry ==
/// A single cached value together with its write metadata.
///
/// The payload is held as raw JSON so one codec serves every resource
/// shape; typed deserialization happens at the cache manager boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cached payload
    pub data: Value,
    /// Write timestamp (Unix milliseconds)
    pub timestamp: u64,
    /// Volatility class, serialized under `type`
    #[serde(rename = "type")]
    pub category: Category,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the given write time.
    pub fn new(data: Value, category: Category, now_ms: u64) -> Self {
        Self {
            data,
            timestamp: now_ms,
            category,
        }
    }

    // == Encode ==
    /// Serializes the entry into its storage string.
    ///
    /// Returns `None` if serialization fails; the caller treats that the
    /// same as any other storage-side failure and skips the write.
    pub fn encode(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    // == Decode ==
    /// Parses a storage string back into an entry.
    ///
    /// Corrupt or foreign data decodes to `None` rather than an error:
    /// anything unreadable at a cache key is indistinguishable from a
    /// miss and must never surface as a failure.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    // == Age ==
    /// Returns the entry age in milliseconds at the given instant.
    ///
    /// Saturates at zero if the clock went backwards relative to the
    /// write timestamp.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.timestamp)
    }

    // == Is Fresh ==
    /// Checks the freshness invariant `now - timestamp <= ttl`.
    ///
    /// Boundary condition: an entry is still fresh at exactly TTL
    /// milliseconds of age and becomes stale one millisecond later.
    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) <= ttl_ms
    }
}
