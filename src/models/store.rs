//! Store Configuration Models
//!
//! Settings, coupons, promotions and shipping rates. Coupons, promotions
//! and shipping rates keep their remote row field names (snake_case);
//! settings use the normalized camelCase form the UI reads.

use serde::{Deserialize, Serialize};

// == Store Settings ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    pub base_shipping_fee: f64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            base_shipping_fee: 500.0,
        }
    }
}

// == Discount Type ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

// == Coupon ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_amount: f64,
    /// ISO 8601; absent means the coupon never expires
    #[serde(default)]
    pub expiry_date: Option<String>,
    pub active: bool,
}

// == Promotion ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: String,
    pub badge_text: String,
    pub title: String,
    pub description: String,
    pub bg_color: String,
    pub text_color: String,
    pub cta_text: String,
    pub link_url: String,
    pub active: bool,
}

// == Shipping Rate ==
/// Per-district delivery rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub id: String,
    pub district_name: String,
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_and_casing() {
        let settings = StoreSettings::default();
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["baseShippingFee"], 500.0);
    }

    #[test]
    fn test_coupon_roundtrip_snake_case() {
        let coupon = Coupon {
            id: "c1".to_string(),
            code: "WELCOME10".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 10.0,
            min_order_amount: 2000.0,
            expiry_date: None,
            active: true,
        };

        let json = serde_json::to_value(&coupon).unwrap();
        assert_eq!(json["discount_type"], "percentage");
        assert_eq!(json["min_order_amount"], 2000.0);

        let back: Coupon = serde_json::from_value(json).unwrap();
        assert_eq!(back, coupon);
    }

    #[test]
    fn test_shipping_rate_roundtrip() {
        let rate = ShippingRate {
            id: "d1".to_string(),
            district_name: "Kandy".to_string(),
            rate: 650.0,
        };
        let json = serde_json::to_string(&rate).unwrap();
        let back: ShippingRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rate);
    }
}
