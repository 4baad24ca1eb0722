//! Product types.

use serde::{Deserialize, Serialize};

use crate::ids::{DealId, ProductId};
use crate::money::Money;
use crate::pricing::{DiscountBadge, TierSchedule};

/// A product as the storefront consumes it.
///
/// All list-shaped fields and the tier schedule are normalized at the
/// data boundary before a `Product` is ever constructed; nothing here
/// branches on wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category name this product belongs to.
    pub category: String,
    /// Image URLs.
    pub images: Vec<String>,
    /// Full description.
    pub description: String,
    /// Whether the product can currently be ordered.
    pub in_stock: bool,
    /// Units on hand. `None` means unknown/unlimited; the storefront
    /// never fabricates a count for missing data.
    pub stock: Option<i64>,
    /// Quantity pricing schedule.
    pub tiers: TierSchedule,
    /// Whether the product appears in the featured carousel.
    pub featured: bool,
    /// Position within the featured carousel.
    pub featured_order: Option<i32>,
    /// Whether the product appears in the trending section.
    pub trending: bool,
    /// Deal this product is part of, if any.
    pub deal_id: Option<DealId>,
    /// Dietary tags for filtering (e.g., "Organic", "Vegan").
    pub dietary_tags: Vec<String>,
    /// Products often purchased together with this one.
    pub frequently_bought_with: Vec<ProductId>,
}

impl Product {
    /// Whether the product can be added to the cart.
    ///
    /// A known-zero stock count overrides the `in_stock` flag; unknown
    /// stock is treated as available.
    pub fn is_available(&self) -> bool {
        self.in_stock && self.stock.map_or(true, |count| count > 0)
    }

    /// The reference unit price shown on listings.
    pub fn base_price(&self) -> Money {
        self.tiers.base_price()
    }

    /// Discount badge metadata for listings.
    pub fn discount_badge(&self) -> DiscountBadge {
        self.tiers.badge()
    }

    /// The primary image URL, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the product carries a dietary tag (case-insensitive).
    pub fn has_dietary_tag(&self, tag: &str) -> bool {
        self.dietary_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use crate::pricing::PriceTier;

    fn product(in_stock: bool, stock: Option<i64>) -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Organic Bananas".to_string(),
            category: "Fruits".to_string(),
            images: vec!["https://img.example/bananas.jpg".to_string()],
            description: "A bunch of organic bananas".to_string(),
            in_stock,
            stock,
            tiers: TierSchedule::new(vec![
                PriceTier::new(1, Money::from_decimal(40.0, Currency::INR), 0),
                PriceTier::new(6, Money::from_decimal(35.0, Currency::INR), 12),
            ])
            .unwrap(),
            featured: false,
            featured_order: None,
            trending: false,
            deal_id: None,
            dietary_tags: vec!["Organic".to_string()],
            frequently_bought_with: Vec::new(),
        }
    }

    #[test]
    fn test_availability() {
        assert!(product(true, Some(10)).is_available());
        assert!(product(true, None).is_available());
        assert!(!product(true, Some(0)).is_available());
        assert!(!product(false, Some(10)).is_available());
    }

    #[test]
    fn test_base_price_and_badge() {
        let p = product(true, Some(10));
        assert_eq!(p.base_price(), Money::from_decimal(40.0, Currency::INR));
        let badge = p.discount_badge();
        assert!(badge.has_discount);
        assert_eq!(badge.max_discount, 12);
    }

    #[test]
    fn test_dietary_tag_match_is_case_insensitive() {
        let p = product(true, None);
        assert!(p.has_dietary_tag("organic"));
        assert!(!p.has_dietary_tag("vegan"));
    }
}
