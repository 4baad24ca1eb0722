//! Admin form to record mapping.
//!
//! The dashboard edits products and deals through plain forms; these
//! types carry the validated form values and render them into the wire
//! shapes the record store expects on writes (comma-joined lists,
//! JSON-encoded tier arrays).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::{DealRecord, ListField, ProductRecord};

/// One tier row in the admin product form.
///
/// The discount percentage is entered by the admin and stored as given;
/// it is display data, never recomputed from the price delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInput {
    pub min_quantity: i64,
    pub price: f64,
    pub discount_percentage: u8,
}

/// The admin product form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub images: Vec<String>,
    pub description: String,
    pub tiers: Vec<TierInput>,
    pub in_stock: bool,
    pub stock_count: Option<i64>,
    pub featured: bool,
    pub trending: bool,
    pub deal_id: Option<String>,
    pub dietary_tags: Vec<String>,
    pub frequently_bought_with: Vec<String>,
    pub featured_order: Option<i32>,
}

impl ProductForm {
    /// Render into the wire record, with `id` zero for new products.
    pub fn into_record(self, id: i64) -> ProductRecord {
        let price_tiers = serde_json::to_string(&self.tiers)
            .map(Value::String)
            .unwrap_or(Value::Null);
        ProductRecord {
            id,
            name: self.name,
            category: self.category,
            images: ListField::joined(&self.images),
            description: self.description,
            price_tiers,
            in_stock: self.in_stock,
            stock_count: self.stock_count,
            featured: self.featured,
            trending: self.trending,
            deal_id: self.deal_id.unwrap_or_default(),
            dietary_tags: ListField::joined(&self.dietary_tags),
            frequently_bought_with: ListField::joined(&self.frequently_bought_with),
            featured_order: self.featured_order,
        }
    }
}

/// The admin deal form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealForm {
    pub title: String,
    pub product_ids: Vec<String>,
    pub expires_at: DateTime<Utc>,
    pub position: i32,
}

impl DealForm {
    /// Render into the wire record, with `id` zero for new deals.
    pub fn into_record(self, id: i64) -> DealRecord {
        DealRecord {
            id,
            title: self.title,
            product_ids: ListField::joined(&self.product_ids),
            expires_at: self.expires_at,
            position: self.position,
        }
    }
}
