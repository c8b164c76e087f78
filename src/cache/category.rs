//! Cache Category Module
//!
//! Classifies cached resources by volatility and maps each class to the
//! TTL applied at read time. The table is static for the process lifetime;
//! durations are tunable but not protocol-critical.

use serde::{Deserialize, Serialize};

// == Category ==
/// Volatility class of a cached resource.
///
/// The category is embedded in every serialized entry (under the wire
/// field `type`) and drives both TTL selection and the granularity of
/// bulk invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Products,
    Orders,
    Settings,
    Wishlist,
    Coupons,
    Promotions,
    ShippingRates,
    /// Tag written by a newer or foreign build. Entries carrying it stay
    /// readable but age out on the conservative default TTL.
    #[serde(other)]
    Unknown,
}

// == TTL Policy Table ==
/// Fallback TTL for entries whose category tag is not recognized.
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

impl Category {
    /// All categories that carry a real policy (excludes `Unknown`).
    pub const ALL: [Category; 7] = [
        Category::Products,
        Category::Orders,
        Category::Settings,
        Category::Wishlist,
        Category::Coupons,
        Category::Promotions,
        Category::ShippingRates,
    ];

    /// Returns the TTL in milliseconds for this category.
    ///
    /// Orders get a deliberately short TTL: order status is mutated
    /// frequently by back-office actions and staleness there is more
    /// harmful than an extra refetch.
    pub fn ttl_ms(&self) -> u64 {
        match self {
            Category::Products => 15 * 60 * 1000,
            Category::Orders => 30 * 1000,
            Category::Settings => 60 * 60 * 1000,
            Category::Wishlist => 10 * 60 * 1000,
            Category::Coupons => 30 * 60 * 1000,
            Category::Promotions => 15 * 60 * 1000,
            Category::ShippingRates => 120 * 60 * 1000,
            Category::Unknown => DEFAULT_TTL_MS,
        }
    }
}
