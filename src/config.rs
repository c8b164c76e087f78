//! Configuration Module
//!
//! Cache configuration: namespace version, per-category TTL overrides and
//! the optional sweep interval. Values load from environment variables
//! with sensible defaults.

use std::collections::HashMap;
use std::env;

use crate::cache::Category;

/// Current cache format version. Baked into every physical key, so bumping
/// it orphans all previously written entries without touching them.
pub const CACHE_VERSION: &str = "sscache_v1";

// == Cache Config ==
/// Cache configuration parameters.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Namespace prefixed to every physical key
    pub namespace: String,
    /// Per-category TTL overrides in milliseconds; categories not listed
    /// here use the static policy table
    pub ttl_overrides: HashMap<Category, u64>,
    /// Interval in seconds between runs of the optional expired-entry sweep
    pub sweep_interval_secs: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment
    /// variables.
    ///
    /// # Environment Variables
    /// - `STORE_CACHE_NAMESPACE` - Key namespace (default: `sscache_v1`)
    /// - `STORE_CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            namespace: env::var("STORE_CACHE_NAMESPACE").unwrap_or_else(|_| CACHE_VERSION.into()),
            ttl_overrides: HashMap::new(),
            sweep_interval_secs: env::var("STORE_CACHE_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Returns a config identical to this one but under a different
    /// namespace. Used for format-version migrations.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Returns the effective TTL in milliseconds for a category,
    /// preferring an override when one is configured.
    pub fn ttl_ms(&self, category: Category) -> u64 {
        self.ttl_overrides
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.ttl_ms())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            namespace: CACHE_VERSION.to_string(),
            ttl_overrides: HashMap::new(),
            sweep_interval_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.namespace, "sscache_v1");
        assert!(config.ttl_overrides.is_empty());
        assert_eq!(config.sweep_interval_secs, 60);
    }

    #[test]
    fn test_ttl_falls_back_to_policy_table() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl_ms(Category::Orders), Category::Orders.ttl_ms());
    }

    #[test]
    fn test_ttl_override_wins() {
        let mut config = CacheConfig::default();
        config.ttl_overrides.insert(Category::Orders, 5_000);
        assert_eq!(config.ttl_ms(Category::Orders), 5_000);
        assert_eq!(config.ttl_ms(Category::Products), Category::Products.ttl_ms());
    }

    #[test]
    fn test_with_namespace() {
        let config = CacheConfig::default().with_namespace("sscache_v2");
        assert_eq!(config.namespace, "sscache_v2");
    }
}
