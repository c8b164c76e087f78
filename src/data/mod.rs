//! Data Access Module
//!
//! Cache-aware bridge between the UI layer and the remote store. Each
//! resource gets the same treatment: reads consult the cache first and
//! fall back to the remote on miss or expiry; writes always go straight
//! to the remote and invalidate the affected category on success, so the
//! next read is forced to refetch.
//!
//! The cache is fully transparent to callers: method names, signatures
//! and return shapes match the remote trait exactly.
//!
//! Orders are the one high-churn resource: a cache hit still returns
//! immediately, but a detached refresh is fired so the next call sees
//! newer data. The refresh task owns its error boundary; its failure can
//! never reach the caller who already has a value.

mod visitor;

use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheManager, Category};
use crate::error::Result;
use crate::models::{
    CartItem, Coupon, Order, OrderDraft, OrderStatus, Product, Promotion, ShippingRate,
    StoreSettings,
};
use crate::remote::RemoteStore;

pub use visitor::{ensure_visitor_id, VISITOR_ID_KEY};

// == Logical Keys ==
pub const KEY_ALL_PRODUCTS: &str = "all_products";
pub const KEY_ALL_ORDERS: &str = "all_orders";
pub const KEY_STORE_SETTINGS: &str = "store_settings";
pub const KEY_ALL_COUPONS: &str = "all_coupons";
pub const KEY_SHIPPING_RATES: &str = "shipping_rates";
pub const KEY_ALL_PROMOTIONS: &str = "all_promotions";

/// Logical cache key for one visitor's wishlist.
pub fn wishlist_key(visitor_id: &str) -> String {
    format!("wishlist_{visitor_id}")
}

// == Store Client ==
/// The storefront's data access surface.
///
/// Owned by the application's composition root; cheap to clone.
#[derive(Clone)]
pub struct StoreClient {
    cache: CacheManager,
    remote: Arc<dyn RemoteStore>,
}

impl StoreClient {
    // == Constructor ==
    pub fn new(cache: CacheManager, remote: Arc<dyn RemoteStore>) -> Self {
        Self { cache, remote }
    }

    /// The cache manager behind this client, for stats and hard resets.
    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    // == Products ==
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        if let Some(products) = self.cache.get::<Vec<Product>>(KEY_ALL_PRODUCTS) {
            return Ok(products);
        }
        let products = self.remote.fetch_products().await?;
        self.cache.set(KEY_ALL_PRODUCTS, &products, Category::Products);
        Ok(products)
    }

    pub async fn upsert_product(&self, product: &Product) -> Result<Product> {
        let saved = self.remote.upsert_product(product).await?;
        self.cache.invalidate(&[Category::Products]);
        Ok(saved)
    }

    pub async fn delete_product(&self, id: &str) -> Result<()> {
        self.remote.delete_product(id).await?;
        self.cache.invalidate(&[Category::Products]);
        Ok(())
    }

    // == Orders ==
    /// Order status churns under back-office actions, so a hit here is
    /// served stale-while-revalidate: return the cached list now, refetch
    /// in the background for the next call.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>> {
        if let Some(orders) = self.cache.get::<Vec<Order>>(KEY_ALL_ORDERS) {
            self.spawn_orders_refresh();
            return Ok(orders);
        }
        let orders = self.remote.fetch_orders().await?;
        self.cache.set(KEY_ALL_ORDERS, &orders, Category::Orders);
        Ok(orders)
    }

    fn spawn_orders_refresh(&self) {
        let remote = Arc::clone(&self.remote);
        let cache = self.cache.clone();
        tokio::spawn(async move {
            match remote.fetch_orders().await {
                Ok(orders) => cache.set(KEY_ALL_ORDERS, &orders, Category::Orders),
                Err(err) => debug!(%err, "background order refresh failed"),
            }
        });
    }

    pub async fn create_order(&self, draft: &OrderDraft, items: &[CartItem]) -> Result<()> {
        self.remote.create_order(draft, items).await?;
        self.cache.invalidate(&[Category::Orders]);
        Ok(())
    }

    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<()> {
        self.remote.update_order_status(id, status).await?;
        self.cache.invalidate(&[Category::Orders]);
        Ok(())
    }

    // == Settings ==
    pub async fn fetch_settings(&self) -> Result<StoreSettings> {
        if let Some(settings) = self.cache.get::<StoreSettings>(KEY_STORE_SETTINGS) {
            return Ok(settings);
        }
        let settings = self.remote.fetch_settings().await?;
        self.cache.set(KEY_STORE_SETTINGS, &settings, Category::Settings);
        Ok(settings)
    }

    pub async fn update_settings(&self, settings: &StoreSettings) -> Result<()> {
        self.remote.update_settings(settings).await?;
        self.cache.invalidate(&[Category::Settings]);
        Ok(())
    }

    // == Coupons ==
    pub async fn fetch_coupons(&self) -> Result<Vec<Coupon>> {
        if let Some(coupons) = self.cache.get::<Vec<Coupon>>(KEY_ALL_COUPONS) {
            return Ok(coupons);
        }
        let coupons = self.remote.fetch_coupons().await?;
        self.cache.set(KEY_ALL_COUPONS, &coupons, Category::Coupons);
        Ok(coupons)
    }

    pub async fn create_coupon(&self, coupon: &Coupon) -> Result<Coupon> {
        let created = self.remote.create_coupon(coupon).await?;
        self.cache.invalidate(&[Category::Coupons]);
        Ok(created)
    }

    pub async fn delete_coupon(&self, id: &str) -> Result<()> {
        self.remote.delete_coupon(id).await?;
        self.cache.invalidate(&[Category::Coupons]);
        Ok(())
    }

    pub async fn toggle_coupon(&self, id: &str, active: bool) -> Result<()> {
        self.remote.toggle_coupon(id, active).await?;
        self.cache.invalidate(&[Category::Coupons]);
        Ok(())
    }

    // == Shipping Rates ==
    pub async fn fetch_shipping_rates(&self) -> Result<Vec<ShippingRate>> {
        if let Some(rates) = self.cache.get::<Vec<ShippingRate>>(KEY_SHIPPING_RATES) {
            return Ok(rates);
        }
        let rates = self.remote.fetch_shipping_rates().await?;
        self.cache.set(KEY_SHIPPING_RATES, &rates, Category::ShippingRates);
        Ok(rates)
    }

    pub async fn upsert_shipping_rate(&self, rate: &ShippingRate) -> Result<ShippingRate> {
        let saved = self.remote.upsert_shipping_rate(rate).await?;
        self.cache.invalidate(&[Category::ShippingRates]);
        Ok(saved)
    }

    pub async fn update_shipping_rate(&self, id: &str, rate: f64) -> Result<()> {
        self.remote.update_shipping_rate(id, rate).await?;
        self.cache.invalidate(&[Category::ShippingRates]);
        Ok(())
    }

    // == Promotions ==
    pub async fn fetch_promotions(&self) -> Result<Vec<Promotion>> {
        if let Some(promotions) = self.cache.get::<Vec<Promotion>>(KEY_ALL_PROMOTIONS) {
            return Ok(promotions);
        }
        let promotions = self.remote.fetch_promotions().await?;
        self.cache.set(KEY_ALL_PROMOTIONS, &promotions, Category::Promotions);
        Ok(promotions)
    }

    // == Wishlist ==
    /// Wishlists are keyed per visitor but share the single `wishlist`
    /// category, so invalidation clears every visitor's entry at once.
    pub async fn fetch_wishlist(&self, visitor_id: &str) -> Result<Vec<String>> {
        let key = wishlist_key(visitor_id);
        if let Some(items) = self.cache.get::<Vec<String>>(&key) {
            return Ok(items);
        }
        let items = self.remote.fetch_wishlist(visitor_id).await?;
        self.cache.set(&key, &items, Category::Wishlist);
        Ok(items)
    }

    pub async fn add_wishlist_item(&self, visitor_id: &str, product_id: &str) -> Result<()> {
        self.remote.add_wishlist_item(visitor_id, product_id).await?;
        self.cache.invalidate(&[Category::Wishlist]);
        Ok(())
    }

    pub async fn remove_wishlist_item(&self, visitor_id: &str, product_id: &str) -> Result<()> {
        self.remote
            .remove_wishlist_item(visitor_id, product_id)
            .await?;
        self.cache.invalidate(&[Category::Wishlist]);
        Ok(())
    }
}
