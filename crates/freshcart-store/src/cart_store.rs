//! The process-wide persisted cart store.
//!
//! `CartStore` is the only legal way to mutate the cart: the header
//! badge, mobile nav, cart page, and sidebar all read through it, and
//! every mutation goes through one of its operations. It is constructed
//! once at application start and handed to consumers from there.
//!
//! Execution is single-threaded and event-driven; a mutation fully
//! completes (state update plus persistence) before the next can be
//! triggered, so no locking is involved. Persistence is best-effort:
//! the in-memory cart is the source of truth for the current session,
//! and a failed write is logged, never surfaced or rolled back.

use std::sync::Arc;

use freshcart_commerce::cart::{Cart, LineItem};
use freshcart_commerce::catalog::Product;
use freshcart_commerce::ids::ProductId;
use freshcart_commerce::money::Money;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::kv::KvStore;
use crate::notify::{Notification, NotificationSink};

/// The authoritative in-memory + persisted cart.
pub struct CartStore {
    cart: Cart,
    kv: KvStore,
    cart_key: String,
    sink: Arc<dyn NotificationSink>,
}

impl CartStore {
    /// Open the store, restoring any persisted cart.
    ///
    /// Corrupt persisted data is discarded and the session starts with
    /// an empty cart; only a failure to open the storage directory
    /// itself is an error.
    pub fn open(
        config: &StoreConfig,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, StoreError> {
        let kv = KvStore::open(&config.data_dir)?;
        let cart = match kv.get::<Cart>(&config.cart_key) {
            Ok(Some(cart)) => {
                tracing::debug!(items = cart.items().len(), "restored persisted cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable persisted cart");
                // Best-effort cleanup so the next session starts clean.
                let _ = kv.delete(&config.cart_key);
                Cart::new()
            }
        };
        Ok(Self {
            cart,
            kv,
            cart_key: config.cart_key.clone(),
            sink,
        })
    }

    /// Add units of a product to the cart.
    ///
    /// Merges into an existing line, resolving the tier for the combined
    /// quantity. A non-positive `quantity` is a caller error and is
    /// treated as a no-op.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) {
        if !self.cart.add(product, quantity) {
            tracing::debug!(product = %product.id, quantity, "ignored non-positive add");
            return;
        }
        self.persist();
        self.sink
            .notify(Notification::success(format!("Added {} to cart!", product.name)));
    }

    /// Replace a line's quantity.
    ///
    /// A quantity of zero or less behaves exactly like
    /// [`remove_from_cart`](Self::remove_from_cart). An unknown product
    /// id is a silent no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }
        if self.cart.get(product_id).is_none() {
            return;
        }
        self.cart.set_quantity(product_id, quantity);
        self.persist();
    }

    /// Remove a line item. Absent ids are not an error.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
        self.persist();
        self.sink.notify(Notification::info("Item removed from cart"));
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
        self.sink.notify(Notification::info("Cart cleared"));
    }

    /// Sum of line totals, using each line's stored tier.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Sum of quantities, for badge counts in navigation.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Total savings versus base-tier pricing.
    pub fn total_savings(&self) -> Money {
        self.cart.total_savings()
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Write the cart to durable storage. Failures are logged, never
    /// propagated; the in-memory cart stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.kv.set(&self.cart_key, &self.cart) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{MemorySink, NotificationLevel};
    use freshcart_commerce::money::Currency;
    use freshcart_commerce::pricing::{PriceTier, TierSchedule};

    fn rupees(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::INR)
    }

    fn tiered_product(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: "Fruits".to_string(),
            images: Vec::new(),
            description: String::new(),
            in_stock: true,
            stock: None,
            tiers: TierSchedule::new(vec![
                PriceTier::new(1, rupees(100.0), 0),
                PriceTier::new(5, rupees(90.0), 10),
                PriceTier::new(10, rupees(80.0), 20),
            ])
            .unwrap(),
            featured: false,
            featured_order: None,
            trending: false,
            deal_id: None,
            dietary_tags: Vec::new(),
            frequently_bought_with: Vec::new(),
        }
    }

    fn store_in(dir: &std::path::Path) -> (CartStore, Arc<MemorySink>) {
        let config = StoreConfig {
            data_dir: dir.to_path_buf(),
            ..StoreConfig::default()
        };
        let sink = Arc::new(MemorySink::new());
        let store = CartStore::open(&config, sink.clone()).unwrap();
        (store, sink)
    }

    #[test]
    fn test_add_merges_and_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, sink) = store_in(dir.path());
        let p = tiered_product("1", "Bananas");

        store.add_to_cart(&p, 3);
        assert_eq!(store.cart_total(), rupees(300.0));

        store.add_to_cart(&p, 7);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.cart_total(), rupees(800.0));
        assert_eq!(store.item_count(), 10);

        let notifications = sink.drain();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].level, NotificationLevel::Success);
        assert_eq!(notifications[0].message, "Added Bananas to cart!");
    }

    #[test]
    fn test_cart_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let p = tiered_product("1", "Bananas");

        {
            let (mut store, _sink) = store_in(dir.path());
            store.add_to_cart(&p, 6);
        }

        let (store, _sink) = store_in(dir.path());
        assert_eq!(store.item_count(), 6);
        assert_eq!(store.items()[0].selected_tier.min_quantity, 5);
        assert_eq!(store.cart_total(), rupees(540.0));
    }

    #[test]
    fn test_corrupt_persisted_cart_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("freshcart-cart.json"), b"{{{ not json").unwrap();

        let (store, _sink) = store_in(dir.path());
        assert!(store.is_empty());
        assert!(store.cart_total().is_zero());
        // The unreadable entry was discarded.
        assert!(!dir.path().join("freshcart-cart.json").exists());
    }

    #[test]
    fn test_update_quantity_zero_removes_with_notification() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, sink) = store_in(dir.path());
        store.add_to_cart(&tiered_product("1", "Bananas"), 2);
        sink.drain();

        store.update_quantity(&ProductId::new("1"), 0);
        assert!(store.is_empty());

        let notifications = sink.drain();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].message, "Item removed from cart");
    }

    #[test]
    fn test_update_quantity_unknown_id_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, sink) = store_in(dir.path());
        store.add_to_cart(&tiered_product("1", "Bananas"), 2);
        sink.drain();

        store.update_quantity(&ProductId::new("missing"), 4);
        assert_eq!(store.item_count(), 2);
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn test_update_quantity_reresolves_tier() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, _sink) = store_in(dir.path());
        store.add_to_cart(&tiered_product("1", "Bananas"), 2);

        store.update_quantity(&ProductId::new("1"), 10);
        assert_eq!(store.items()[0].selected_tier.min_quantity, 10);
        assert_eq!(store.cart_total(), rupees(800.0));
    }

    #[test]
    fn test_clear_cart() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, sink) = store_in(dir.path());
        store.add_to_cart(&tiered_product("1", "Bananas"), 2);
        store.add_to_cart(&tiered_product("2", "Apples"), 1);
        sink.drain();

        store.clear_cart();
        assert!(store.is_empty());
        assert_eq!(sink.drain()[0].message, "Cart cleared");

        // Cleared state persists across restart.
        let (store, _sink) = store_in(dir.path());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_non_positive_quantity_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, sink) = store_in(dir.path());

        store.add_to_cart(&tiered_product("1", "Bananas"), 0);
        store.add_to_cart(&tiered_product("1", "Bananas"), -2);
        assert!(store.is_empty());
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn test_persistence_failure_keeps_in_memory_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, _sink) = store_in(dir.path());

        // Make writes fail by removing the storage directory.
        std::fs::remove_dir_all(dir.path()).unwrap();

        store.add_to_cart(&tiered_product("1", "Bananas"), 3);
        assert_eq!(store.item_count(), 3);
        assert_eq!(store.cart_total(), rupees(300.0));
    }
}
