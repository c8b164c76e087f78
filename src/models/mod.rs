//! Resource Models
//!
//! Normalized shapes for every remote resource the storefront reads and
//! writes. These are also the cache payloads, so each type round-trips
//! through serde_json.

mod catalog;
mod orders;
mod store;

pub use catalog::Product;
pub use orders::{CartItem, Order, OrderDraft, OrderItem, OrderStatus, ShippingAddress};
pub use store::{Coupon, DiscountType, Promotion, ShippingRate, StoreSettings};
