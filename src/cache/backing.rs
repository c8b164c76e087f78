//! Backing Store Module
//!
//! Seam to the persistent key-value medium that physically holds cache
//! entries. The medium is a plain string map with no TTL support of its
//! own; all expiry and namespacing logic lives in the cache manager.
//!
//! The API is synchronous on purpose: cache reads and writes never
//! suspend, only remote fetches do.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{Result, StoreError};

// == Backing Store Trait ==
/// Durable string key-value map.
pub trait BackingStore: Send + Sync {
    /// Returns the raw value at `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// May fail when the medium is out of space (quota); callers decide
    /// whether that matters.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value at `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);

    /// Returns every key currently present, in no particular order.
    fn keys(&self) -> Vec<String>;
}

/// Shared handle to a backing store.
///
/// A std RwLock, not an async one: no backing-store operation suspends,
/// and the guard is never held across an await point.
pub type SharedStore = Arc<RwLock<Box<dyn BackingStore>>>;

/// Wraps a backing store into a shared handle.
pub fn shared(store: impl BackingStore + 'static) -> SharedStore {
    Arc::new(RwLock::new(Box::new(store)))
}

// == Memory Store ==
/// HashMap-backed store, the default medium and the test double.
///
/// An optional byte quota bounds the sum of stored key and value lengths,
/// modelling the quota errors a browser-style persistent store raises.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an unbounded in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes once `quota_bytes` of key and
    /// value data would be held.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl BackingStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota_bytes {
            let projected = self.used_bytes_excluding(key) + key.len() + value.len();
            if projected > quota {
                return Err(StoreError::StorageFull(format!(
                    "quota of {} bytes exceeded",
                    quota
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
