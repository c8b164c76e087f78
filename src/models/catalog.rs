//! Catalog Models
//!
//! The normalized product shape served to the UI layer.

use serde::{Deserialize, Serialize};

// == Product ==
/// A storefront product in its normalized (UI-facing) form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub rating: f64,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub stock: u32,
    pub detailed_description: String,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub is_new_arrival: bool,
    #[serde(default)]
    pub is_free_shipping: bool,
}
