//! Raw record shapes as the remote store returns them.
//!
//! The wire format is loose: list-shaped fields arrive either as JSON
//! arrays or as comma-joined strings, and `priceTiers` may be a
//! structured array or a JSON-encoded string. Everything is normalized
//! into domain types here, at the boundary, so core logic never
//! branches on wire shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use chrono::{DateTime, Utc};
use freshcart_commerce::catalog::{Category, Deal, Product};
use freshcart_commerce::ids::{CategoryId, DealId, ProductId};
use freshcart_commerce::money::Currency;
use freshcart_commerce::pricing::TierSchedule;

use crate::error::FetchError;

/// A field that arrives either as an array or a comma-joined string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListField {
    /// Comma-joined form, e.g. `"2,6,12"` or `"Organic, Vegan"`.
    Joined(String),
    /// Structured form.
    Items(Vec<String>),
}

impl ListField {
    /// Normalize into a list, trimming entries and dropping empties.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            ListField::Joined(s) => s
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(String::from)
                .collect(),
            ListField::Items(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// The comma-joined form the record store expects on writes.
    pub fn joined(items: &[String]) -> Self {
        ListField::Joined(items.join(","))
    }
}

impl Default for ListField {
    fn default() -> Self {
        ListField::Items(Vec::new())
    }
}

fn default_true() -> bool {
    true
}

/// A product record on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Id", default)]
    pub id: i64,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub images: ListField,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "priceTiers", default)]
    pub price_tiers: Value,
    #[serde(rename = "inStock", default = "default_true")]
    pub in_stock: bool,
    /// Missing means the count is unknown, not zero.
    #[serde(rename = "stockCount", default)]
    pub stock_count: Option<i64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub trending: bool,
    #[serde(rename = "dealId", default)]
    pub deal_id: String,
    #[serde(rename = "dietaryTags", default)]
    pub dietary_tags: ListField,
    #[serde(rename = "frequentlyBoughtWith", default)]
    pub frequently_bought_with: ListField,
    #[serde(rename = "featuredOrder", default)]
    pub featured_order: Option<i32>,
}

impl Default for ProductRecord {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            category: String::new(),
            images: ListField::default(),
            description: String::new(),
            price_tiers: Value::Null,
            // Absent on the wire means orderable, same as the serde default.
            in_stock: true,
            stock_count: None,
            featured: false,
            trending: false,
            deal_id: String::new(),
            dietary_tags: ListField::default(),
            frequently_bought_with: ListField::default(),
            featured_order: None,
        }
    }
}

impl ProductRecord {
    /// Normalize into the domain type.
    pub fn into_product(self, currency: Currency) -> Result<Product, FetchError> {
        let tiers = TierSchedule::from_json_value(&self.price_tiers, currency)?;
        let deal_id = {
            let trimmed = self.deal_id.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(DealId::new(trimmed))
            }
        };
        Ok(Product {
            id: ProductId::from(self.id),
            name: self.name,
            category: self.category,
            images: self.images.to_vec(),
            description: self.description,
            in_stock: self.in_stock,
            stock: self.stock_count,
            tiers,
            featured: self.featured,
            featured_order: self.featured_order,
            trending: self.trending,
            deal_id,
            dietary_tags: self.dietary_tags.to_vec(),
            frequently_bought_with: self
                .frequently_bought_with
                .to_vec()
                .into_iter()
                .map(ProductId::new)
                .collect(),
        })
    }
}

/// A category record on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "Id", default)]
    pub id: i64,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl CategoryRecord {
    /// Normalize into the domain type.
    pub fn into_category(self) -> Category {
        Category {
            id: CategoryId::from(self.id),
            name: self.name,
            icon: self.icon,
            image_url: self.image,
        }
    }
}

/// A deal record on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealRecord {
    #[serde(rename = "Id", default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "productIds", default)]
    pub product_ids: ListField,
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub position: i32,
}

impl DealRecord {
    /// Normalize into the domain type.
    pub fn into_deal(self) -> Deal {
        Deal {
            id: DealId::from(self.id),
            title: self.title,
            product_ids: self
                .product_ids
                .to_vec()
                .into_iter()
                .map(ProductId::new)
                .collect(),
            expires_at: self.expires_at,
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_field_joined_form() {
        let field = ListField::Joined("2, 6 ,12,".to_string());
        assert_eq!(field.to_vec(), vec!["2", "6", "12"]);
    }

    #[test]
    fn test_list_field_structured_form() {
        let field = ListField::Items(vec!["Organic".into(), " Vegan ".into(), "".into()]);
        assert_eq!(field.to_vec(), vec!["Organic", "Vegan"]);
    }

    #[test]
    fn test_product_record_with_string_fields() {
        let record: ProductRecord = serde_json::from_value(json!({
            "Id": 4,
            "Name": "Organic Spinach",
            "category": "Vegetables",
            "images": "https://img.example/a.jpg,https://img.example/b.jpg",
            "description": "Fresh leafy spinach",
            "priceTiers": "[{\"minQuantity\":1,\"price\":30.0,\"discountPercentage\":0}]",
            "inStock": true,
            "dietaryTags": "Organic,Gluten-Free",
            "frequentlyBoughtWith": "2,6"
        }))
        .unwrap();

        let product = record.into_product(Currency::INR).unwrap();
        assert_eq!(product.id.as_str(), "4");
        assert_eq!(product.images.len(), 2);
        assert_eq!(product.dietary_tags, vec!["Organic", "Gluten-Free"]);
        assert_eq!(product.frequently_bought_with.len(), 2);
        assert_eq!(product.stock, None);
        assert_eq!(product.base_price().amount_cents, 3000);
    }

    #[test]
    fn test_product_record_with_array_fields() {
        let record: ProductRecord = serde_json::from_value(json!({
            "Id": 5,
            "Name": "Almonds",
            "category": "Nuts",
            "images": ["https://img.example/almonds.jpg"],
            "priceTiers": [
                {"minQuantity": 1, "price": 500.0, "discountPercentage": 0},
                {"minQuantity": 3, "price": 450.0, "discountPercentage": 10}
            ],
            "stockCount": 12,
            "dietaryTags": ["Vegan"]
        }))
        .unwrap();

        let product = record.into_product(Currency::INR).unwrap();
        assert_eq!(product.stock, Some(12));
        assert_eq!(product.tiers.tiers().len(), 2);
    }

    #[test]
    fn test_product_record_malformed_tiers_fail() {
        let record: ProductRecord = serde_json::from_value(json!({
            "Id": 6,
            "Name": "Broken",
            "priceTiers": [{"minQuantity": "lots", "price": 10.0}]
        }))
        .unwrap();

        let err = record.into_product(Currency::INR).unwrap_err();
        assert!(matches!(err, FetchError::InvalidRecord(_)));
    }

    #[test]
    fn test_empty_deal_id_is_none() {
        let record: ProductRecord = serde_json::from_value(json!({
            "Id": 7,
            "Name": "Plain",
            "dealId": ""
        }))
        .unwrap();
        assert!(record.into_product(Currency::INR).unwrap().deal_id.is_none());
    }

    #[test]
    fn test_deal_record_normalization() {
        let record: DealRecord = serde_json::from_value(json!({
            "Id": 1,
            "title": "Weekend Fruit Fest",
            "productIds": "2,6,12",
            "expiresAt": "2026-08-09T18:00:00Z",
            "position": 1
        }))
        .unwrap();

        let deal = record.into_deal();
        assert_eq!(deal.product_ids.len(), 3);
        assert_eq!(deal.title, "Weekend Fruit Fest");
    }
}
