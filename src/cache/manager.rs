//! Cache Manager Module
//!
//! Single authority for reading, writing and invalidating cached entries;
//! the only component that touches the backing store's namespaced keys.
//!
//! Every operation here is synchronous and infallible from the caller's
//! point of view: storage and parse errors degrade to misses or are
//! swallowed, because the cache is a performance layer, never a source of
//! truth. The manager is a cheap cloneable handle over shared state, built
//! explicitly with injectable store and clock so tests can drive time.

use std::sync::{Arc, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::backing::{BackingStore, SharedStore};
use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheStats, Category, Clock};
use crate::config::CacheConfig;

// == Cache Manager ==
/// Versioned, TTL-based read cache over a string key-value store.
#[derive(Clone)]
pub struct CacheManager {
    inner: Arc<ManagerInner>,
}

struct ManagerInner {
    store: SharedStore,
    clock: Arc<dyn Clock>,
    config: CacheConfig,
    stats: StatsCounters,
}

impl CacheManager {
    // == Constructor ==
    /// Creates a cache manager over the given store, clock and config.
    pub fn new(store: SharedStore, clock: Arc<dyn Clock>, config: CacheConfig) -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                store,
                clock,
                config,
                stats: StatsCounters::default(),
            }),
        }
    }

    // == Get ==
    /// Returns the cached value at `key` if present, fresh and readable.
    ///
    /// Everything else is a miss: absent key, corrupt or foreign data,
    /// payload that no longer matches `T`, or an entry older than its
    /// category's TTL. Expired entries are not deleted here; they stay
    /// inert until overwritten, invalidated or swept.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = {
            let store = self.read_store();
            store.get(&self.namespaced(key))
        };
        let Some(raw) = raw else {
            self.inner.stats.record_miss();
            return None;
        };

        let Some(entry) = CacheEntry::decode(&raw) else {
            self.inner.stats.record_corrupt();
            self.inner.stats.record_miss();
            return None;
        };

        let ttl = self.inner.config.ttl_ms(entry.category);
        if !entry.is_fresh(self.inner.clock.now_ms(), ttl) {
            self.inner.stats.record_miss();
            return None;
        }

        match serde_json::from_value(entry.data) {
            Ok(data) => {
                self.inner.stats.record_hit();
                Some(data)
            }
            Err(err) => {
                debug!(key, %err, "cached payload did not match requested shape");
                self.inner.stats.record_corrupt();
                self.inner.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores `data` under `key`, stamped with the current time.
    ///
    /// The entry is always replaced wholesale; freshness resets on every
    /// call. Serialization or storage failure (quota) is swallowed with a
    /// debug log so a full medium never becomes an application error.
    pub fn set<T: Serialize>(&self, key: &str, data: &T, category: Category) {
        let value = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(err) => {
                debug!(key, %err, "skipping cache write: payload not serializable");
                self.inner.stats.record_failed_write();
                return;
            }
        };

        let entry = CacheEntry::new(value, category, self.inner.clock.now_ms());
        let Some(raw) = entry.encode() else {
            self.inner.stats.record_failed_write();
            return;
        };

        let mut store = self.write_store();
        if let Err(err) = store.set(&self.namespaced(key), &raw) {
            debug!(key, %err, "cache write failed");
            self.inner.stats.record_failed_write();
        }
    }

    // == Invalidate ==
    /// Removes every namespaced entry whose category is in `categories`.
    ///
    /// The category tag lives inside the serialized value, so each entry
    /// under the namespace is decoded to learn its tag. Entries that fail
    /// to decode are left alone; they are already inert as misses. After
    /// this returns, a `get` for any key that held one of the given
    /// categories is guaranteed to miss.
    pub fn invalidate(&self, categories: &[Category]) {
        let mut store = self.write_store();
        let mut removed: u64 = 0;

        for key in self.namespace_keys(&**store) {
            let Some(raw) = store.get(&key) else { continue };
            let Some(entry) = CacheEntry::decode(&raw) else { continue };
            if categories.contains(&entry.category) {
                store.remove(&key);
                removed += 1;
            }
        }

        if removed > 0 {
            debug!(?categories, removed, "invalidated cache entries");
            self.inner.stats.record_invalidated(removed);
        }
    }

    // == Clear All ==
    /// Removes every namespaced key unconditionally.
    ///
    /// For hard resets (version migration, debugging); not part of the
    /// ordinary request path.
    pub fn clear_all(&self) {
        let mut store = self.write_store();
        for key in self.namespace_keys(&**store) {
            store.remove(&key);
        }
    }

    // == Sweep Expired ==
    /// Removes entries that have outlived their TTL and returns how many
    /// were dropped.
    ///
    /// Reads never evict; this exists only for the optional periodic
    /// sweep task to bound storage growth. Unreadable entries are left
    /// where they are.
    pub fn sweep_expired(&self) -> usize {
        let now = self.inner.clock.now_ms();
        let mut store = self.write_store();
        let mut removed = 0;

        for key in self.namespace_keys(&**store) {
            let Some(raw) = store.get(&key) else { continue };
            let Some(entry) = CacheEntry::decode(&raw) else { continue };
            if !entry.is_fresh(now, self.inner.config.ttl_ms(entry.category)) {
                store.remove(&key);
                removed += 1;
            }
        }

        removed
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.stats.snapshot()
    }

    /// Namespace currently in use for physical keys.
    pub fn namespace(&self) -> &str {
        &self.inner.config.namespace
    }

    // == Key Namespacing ==
    fn namespaced(&self, key: &str) -> String {
        format!("{}_{}", self.inner.config.namespace, key)
    }

    fn namespace_keys(&self, store: &dyn BackingStore) -> Vec<String> {
        let prefix = format!("{}_", self.inner.config.namespace);
        store
            .keys()
            .into_iter()
            .filter(|k| k.starts_with(&prefix))
            .collect()
    }

    // A poisoned lock only means another thread panicked mid-operation;
    // entries are whole-value replacements, so the map is still readable.
    fn read_store(&self) -> RwLockReadGuard<'_, Box<dyn BackingStore>> {
        self.inner
            .store
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, Box<dyn BackingStore>> {
        self.inner
            .store
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
