//! Expired-Entry Sweep Task
//!
//! Periodic removal of entries that have outlived their TTL. Expiry
//! itself is lazy (a stale entry already reads as a miss); this task only
//! bounds storage growth when the medium is under pressure, and is safe
//! to skip entirely.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheManager;

/// Spawns a background task that periodically sweeps expired entries.
///
/// Returns the task's JoinHandle so the composition root can abort it
/// during shutdown.
pub fn spawn_sweep_task(cache: CacheManager, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(interval_secs, "starting cache sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_expired();
            if removed > 0 {
                info!(removed, "cache sweep removed expired entries");
            } else {
                debug!("cache sweep found nothing expired");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::cache::backing::{shared, MemoryStore};
    use crate::cache::{Category, Clock, ManualClock};
    use crate::config::CacheConfig;

    fn manager_with_clock() -> (CacheManager, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(0));
        let manager = CacheManager::new(
            shared(MemoryStore::new()),
            clock.clone() as Arc<dyn Clock>,
            CacheConfig::default(),
        );
        (manager, clock)
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let (manager, clock) = manager_with_clock();

        manager.set("all_orders", &serde_json::json!(1), Category::Orders);
        clock.advance(Category::Orders.ttl_ms() + 1);

        let handle = spawn_sweep_task(manager.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        // Entry is gone even though no read ever touched it.
        assert_eq!(manager.stats().hits, 0);
        assert!(manager.get::<serde_json::Value>("all_orders").is_none());

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_fresh_entries() {
        let (manager, _clock) = manager_with_clock();

        manager.set("all_products", &serde_json::json!(["p"]), Category::Products);

        let handle = spawn_sweep_task(manager.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(manager.get::<serde_json::Value>("all_products").is_some());

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let (manager, _clock) = manager_with_clock();

        let handle = spawn_sweep_task(manager, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished());
    }
}
