//! Order Models
//!
//! Orders as read back from the remote store (denormalized with customer
//! and line items) plus the draft shape used when placing one.

use serde::{Deserialize, Serialize};

use crate::models::Product;

// == Order Status ==
/// Lifecycle of an order, mutated by back-office actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

// == Shipping Address ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}

// == Order Item ==
/// One line of an order: the product as it was sold, with the quantity
/// and the unit price captured at purchase time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product: Product,
    pub quantity: u32,
    pub price: f64,
}

// == Order ==
/// A placed order in its normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub total: f64,
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub discount: f64,
    pub status: OrderStatus,
    pub payment_method: String,
    pub date: String,
    pub shipping_address: ShippingAddress,
    pub items: Vec<OrderItem>,
}

// == Cart Item ==
/// What checkout sends per line when creating an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

// == Order Draft ==
/// Checkout-side order details; the remote store persists the customer,
/// the order row and its items from this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub id: String,
    pub total: f64,
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub discount: f64,
    pub payment_method: String,
    pub shipping_address: ShippingAddress,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Soap".to_string(),
            description: "Sandalwood".to_string(),
            price: 350.0,
            original_price: None,
            category: "bath".to_string(),
            image: "soap.jpg".to_string(),
            gallery: vec![],
            rating: 4.0,
            highlights: vec![],
            stock: 40,
            detailed_description: "Sandalwood bar".to_string(),
            is_best_seller: false,
            is_new_arrival: true,
            is_free_shipping: false,
        }
    }

    #[test]
    fn test_order_json_roundtrip() {
        let order = Order {
            id: "ORD-1".to_string(),
            total: 850.0,
            subtotal: 350.0,
            shipping_fee: 500.0,
            discount: 0.0,
            status: OrderStatus::Pending,
            payment_method: "COD".to_string(),
            date: "2026-08-30".to_string(),
            shipping_address: ShippingAddress {
                name: "Guest".to_string(),
                email: "g@example.com".to_string(),
                phone: "0770000000".to_string(),
                address: "1 Main St".to_string(),
                city: "Colombo".to_string(),
            },
            items: vec![OrderItem {
                product: sample_product(),
                quantity: 1,
                price: 350.0,
            }],
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["shippingFee"], 500.0);
        assert_eq!(json["status"], "Pending");

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_order_status_wire_tags() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"Shipped\""
        );
        let status: OrderStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }
}
