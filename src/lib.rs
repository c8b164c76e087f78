//! Storefront Cache - client-side read cache for a storefront data layer
//!
//! Sits between UI components and a hosted database: a local, versioned,
//! TTL-based cache with per-category expiry policies, stale-while-revalidate
//! refresh for high-churn resources and explicit invalidation on writes.
//!
//! The composition root builds a [`cache::CacheManager`] over a backing
//! store and clock of its choosing, wraps it with a remote-store
//! implementation into a [`data::StoreClient`], and hands that to the UI.
//! Callers never see the cache: hits and misses produce identical results.

pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod remote;
pub mod tasks;

pub use cache::{CacheManager, CacheStats, Category, Clock, SystemClock};
pub use config::{CacheConfig, CACHE_VERSION};
pub use data::StoreClient;
pub use error::{Result, StoreError};
pub use remote::RemoteStore;
pub use tasks::spawn_sweep_task;
