//! Property-Based Tests for the Cache Manager
//!
//! Uses proptest to verify the cache's contract over arbitrary key,
//! payload and category mixes, with an injected manual clock so TTL
//! behavior is deterministic.

use std::sync::Arc;

use proptest::prelude::*;

use crate::cache::backing::{shared, MemoryStore};
use crate::cache::{CacheManager, Category, Clock, ManualClock};
use crate::config::CacheConfig;

// == Strategies ==
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

fn payload_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}"
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn test_manager(namespace: &str) -> (CacheManager, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_000_000));
    let manager = CacheManager::new(
        shared(MemoryStore::new()),
        clock.clone() as Arc<dyn Clock>,
        CacheConfig::default().with_namespace(namespace),
    );
    (manager, clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing any payload and reading it back before its category's TTL
    // elapses returns the exact payload.
    #[test]
    fn prop_roundtrip_within_ttl(
        key in valid_key_strategy(),
        payload in payload_strategy(),
        category in category_strategy(),
    ) {
        let (manager, clock) = test_manager("sscache_v1");

        manager.set(&key, &payload, category);
        clock.advance(category.ttl_ms()); // boundary-inclusive

        let got: Option<String> = manager.get(&key);
        prop_assert_eq!(got, Some(payload));
    }

    // One millisecond past the TTL the same entry reads as absent.
    #[test]
    fn prop_stale_reads_as_absent(
        key in valid_key_strategy(),
        payload in payload_strategy(),
        category in category_strategy(),
    ) {
        let (manager, clock) = test_manager("sscache_v1");

        manager.set(&key, &payload, category);
        clock.advance(category.ttl_ms() + 1);

        prop_assert_eq!(manager.get::<String>(&key), None);
    }

    // Invalidating one category removes exactly that category's entries:
    // every other entry remains readable.
    #[test]
    fn prop_invalidation_scoping(
        entries in prop::collection::hash_map(
            valid_key_strategy(),
            (payload_strategy(), category_strategy()),
            1..20,
        ),
        victim in category_strategy(),
    ) {
        let (manager, _clock) = test_manager("sscache_v1");

        for (key, (payload, category)) in &entries {
            manager.set(key, payload, *category);
        }

        manager.invalidate(&[victim]);

        for (key, (payload, category)) in &entries {
            let got: Option<String> = manager.get(key);
            if *category == victim {
                prop_assert_eq!(got, None, "entry of invalidated category survived");
            } else {
                prop_assert_eq!(got, Some(payload.clone()), "unrelated entry was removed");
            }
        }
    }

    // Bumping the namespace version makes every previously written entry a
    // permanent miss without an explicit clear.
    #[test]
    fn prop_namespace_bump_orphans_everything(
        entries in prop::collection::hash_map(
            valid_key_strategy(),
            (payload_strategy(), category_strategy()),
            1..20,
        ),
    ) {
        let clock = Arc::new(ManualClock::new(1_000_000));
        let store = shared(MemoryStore::new());
        let v1 = CacheManager::new(
            Arc::clone(&store),
            clock.clone() as Arc<dyn Clock>,
            CacheConfig::default().with_namespace("sscache_v1"),
        );
        let v2 = CacheManager::new(
            store,
            clock as Arc<dyn Clock>,
            CacheConfig::default().with_namespace("sscache_v2"),
        );

        for (key, (payload, category)) in &entries {
            v1.set(key, payload, *category);
        }

        for key in entries.keys() {
            prop_assert_eq!(v2.get::<String>(key), None);
        }
    }

    // Re-setting a key resets its freshness window.
    #[test]
    fn prop_set_resets_freshness(
        key in valid_key_strategy(),
        payload in payload_strategy(),
        category in category_strategy(),
    ) {
        let (manager, clock) = test_manager("sscache_v1");
        let ttl = category.ttl_ms();

        manager.set(&key, &payload, category);
        clock.advance(ttl); // about to go stale
        manager.set(&key, &payload, category);
        clock.advance(ttl); // would be far past the first write's window

        prop_assert_eq!(manager.get::<String>(&key), Some(payload));
    }
}

// Kept outside the proptest block: a deterministic check that the scan in
// `invalidate` never removes entries it cannot decode, even when every
// category is being invalidated.
#[test]
fn corrupt_entries_survive_full_invalidation() {
    let clock = Arc::new(ManualClock::new(0));
    let store = shared(MemoryStore::new());
    let manager = CacheManager::new(
        Arc::clone(&store),
        clock as Arc<dyn Clock>,
        CacheConfig::default(),
    );

    manager.set("all_products", &"p", Category::Products);
    {
        let mut guard = store.write().unwrap();
        guard.set("sscache_v1_mystery", "???").unwrap();
    }

    manager.invalidate(&Category::ALL);

    assert!(manager.get::<String>("all_products").is_none());
    let guard = store.read().unwrap();
    assert!(guard.get("sscache_v1_mystery").is_some());
}
