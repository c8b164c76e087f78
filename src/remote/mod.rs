//! Remote Store Module
//!
//! The opaque remote database collaborator, one async function per
//! resource operation. Implementations own query, auth and transport
//! concerns; this crate only consumes the trait. Every method either
//! returns the typed result or fails with a `StoreError` the caller
//! (UI layer) decides how to surface.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    CartItem, Coupon, Order, OrderDraft, OrderStatus, Product, Promotion, ShippingRate,
    StoreSettings,
};

// == Remote Store Trait ==
/// Async interface to the hosted database backing the storefront.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    // == Products ==
    async fn fetch_products(&self) -> Result<Vec<Product>>;
    async fn upsert_product(&self, product: &Product) -> Result<Product>;
    async fn delete_product(&self, id: &str) -> Result<()>;

    // == Orders ==
    async fn fetch_orders(&self) -> Result<Vec<Order>>;
    async fn create_order(&self, draft: &OrderDraft, items: &[CartItem]) -> Result<()>;
    async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<()>;

    // == Settings ==
    async fn fetch_settings(&self) -> Result<StoreSettings>;
    async fn update_settings(&self, settings: &StoreSettings) -> Result<()>;

    // == Coupons ==
    async fn fetch_coupons(&self) -> Result<Vec<Coupon>>;
    async fn create_coupon(&self, coupon: &Coupon) -> Result<Coupon>;
    async fn delete_coupon(&self, id: &str) -> Result<()>;
    async fn toggle_coupon(&self, id: &str, active: bool) -> Result<()>;

    // == Shipping Rates ==
    async fn fetch_shipping_rates(&self) -> Result<Vec<ShippingRate>>;
    async fn upsert_shipping_rate(&self, rate: &ShippingRate) -> Result<ShippingRate>;
    async fn update_shipping_rate(&self, id: &str, rate: f64) -> Result<()>;

    // == Promotions ==
    async fn fetch_promotions(&self) -> Result<Vec<Promotion>>;

    // == Wishlist ==
    /// Returns the product ids on the visitor's wishlist.
    async fn fetch_wishlist(&self, visitor_id: &str) -> Result<Vec<String>>;
    async fn add_wishlist_item(&self, visitor_id: &str, product_id: &str) -> Result<()>;
    async fn remove_wishlist_item(&self, visitor_id: &str, product_id: &str) -> Result<()>;
}
