//! Shopping cart aggregate.
//!
//! One line item per product, in insertion order. Every mutation
//! re-resolves the line's price tier against the new quantity, so a
//! stored `selected_tier` is always consistent with the quantity next
//! to it and totals never need recomputation from the schedule.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::pricing::PriceTier;

/// A product's entry in the cart.
///
/// Serialized field names match the persisted cart format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Owning product's id; unique within the cart.
    pub product_id: ProductId,
    /// Units ordered; always positive while stored.
    pub quantity: i64,
    /// Tier resolved for `quantity` at last mutation.
    pub selected_tier: PriceTier,
    /// Snapshot of the product at time of last update, kept for display.
    pub product: Product,
}

impl LineItem {
    /// `selected_tier.price * quantity`.
    pub fn line_total(&self) -> Money {
        self.selected_tier.price.multiply(self.quantity)
    }

    /// Savings versus the base tier for this line.
    pub fn line_savings(&self) -> Money {
        self.product.tiers.quote(self.quantity).line_savings
    }
}

/// The cart aggregate: an ordered collection of line items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a cart from persisted line items.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Line items in display (insertion) order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by product id.
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Whether the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add units of a product, merging into an existing line.
    ///
    /// The tier is resolved against the combined quantity and the stored
    /// product snapshot is refreshed. A non-positive `quantity` is a
    /// caller error and leaves the cart untouched.
    pub fn add(&mut self, product: &Product, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            let combined = existing.quantity.saturating_add(quantity);
            existing.quantity = combined;
            existing.selected_tier = product.tiers.resolve(combined);
            existing.product = product.clone();
        } else {
            self.items.push(LineItem {
                product_id: product.id.clone(),
                quantity,
                selected_tier: product.tiers.resolve(quantity),
                product: product.clone(),
            });
        }
        true
    }

    /// Replace a line's quantity, re-resolving its tier.
    ///
    /// A quantity of zero or less removes the line. An absent product id
    /// is a no-op, not an error.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| &i.product_id == product_id)
        {
            item.quantity = quantity;
            item.selected_tier = item.product.tiers.resolve(quantity);
        }
    }

    /// Remove a line item. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < before
    }

    /// Remove all line items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of line totals, using each line's stored tier.
    pub fn total(&self) -> Money {
        let cents = self
            .items
            .iter()
            .map(|i| i.line_total().amount_cents)
            .fold(0i64, i64::saturating_add);
        Money::new(cents, self.currency())
    }

    /// Sum of quantities, for badge counts.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .map(|i| i.quantity)
            .fold(0i64, i64::saturating_add)
    }

    /// Total savings versus base-tier pricing across all lines.
    pub fn total_savings(&self) -> Money {
        let cents = self
            .items
            .iter()
            .map(|i| i.line_savings().amount_cents)
            .fold(0i64, i64::saturating_add);
        Money::new(cents, self.currency())
    }

    fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.selected_tier.price.currency)
            .unwrap_or_default()
    }
}
