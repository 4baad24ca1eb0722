//! Cart sidebar renderer.

use freshcart_store::CartStore;

use crate::ui::render_empty;

/// Render the cart sidebar: line items, upsell hints, and totals.
///
/// Checkout is a simulated no-op; the button exists for layout only.
pub fn render_cart_sidebar(store: &CartStore) -> String {
    if store.is_empty() {
        return render_empty("Your cart is empty", "Add some fresh groceries to get started");
    }

    let lines = store
        .items()
        .iter()
        .map(|item| {
            let upsell = item
                .product
                .tiers
                .next_tier_incentive(item.quantity)
                .filter(|hint| hint.per_unit_savings.is_positive())
                .map(|hint| {
                    format!(
                        r#"<p class="line-upsell">Add {} more to save {} per unit</p>"#,
                        hint.additional_units_needed,
                        hint.per_unit_savings.display()
                    )
                })
                .unwrap_or_default();

            format!(
                r#"    <li class="cart-line" data-product-id="{id}">
        <span class="line-name">{name}</span>
        <span class="line-quantity">x{quantity}</span>
        <span class="line-unit-price">{unit} each</span>
        <span class="line-total">{total}</span>
        <button class="line-remove" type="button" data-action="remove">Remove</button>
        {upsell}
    </li>"#,
                id = item.product_id,
                name = item.product.name,
                quantity = item.quantity,
                unit = item.selected_tier.price.display(),
                total = item.line_total().display(),
                upsell = upsell
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let savings = store.total_savings();
    let savings_banner = if savings.is_positive() {
        format!(
            r#"    <p class="cart-savings">You're saving {} with bulk pricing</p>"#,
            savings.display()
        )
    } else {
        String::new()
    };

    format!(
        r#"<aside class="cart-sidebar" data-section="cart">
    <h2 class="cart-title">Shopping Cart ({count} items)</h2>
    <ul class="cart-lines">
{lines}
    </ul>
{savings_banner}
    <div class="cart-footer">
        <span class="cart-total-label">Total</span>
        <span class="cart-total">{total}</span>
        <button class="checkout-button" type="button">Checkout</button>
        <button class="clear-cart" type="button" data-action="clear">Clear Cart</button>
    </div>
</aside>"#,
        count = store.item_count(),
        lines = lines,
        savings_banner = savings_banner,
        total = store.cart_total().display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshcart_commerce::catalog::Product;
    use freshcart_commerce::ids::ProductId;
    use freshcart_commerce::money::{Currency, Money};
    use freshcart_commerce::pricing::{PriceTier, TierSchedule};
    use freshcart_store::{MemorySink, StoreConfig};
    use std::sync::Arc;

    fn tiered_product() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Organic Bananas".to_string(),
            category: "Fruits".to_string(),
            images: Vec::new(),
            description: String::new(),
            in_stock: true,
            stock: None,
            tiers: TierSchedule::new(vec![
                PriceTier::new(1, Money::from_decimal(100.0, Currency::INR), 0),
                PriceTier::new(5, Money::from_decimal(90.0, Currency::INR), 10),
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

    fn store() -> (CartStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            data_dir: dir.path().to_path_buf(),
            ..StoreConfig::default()
        };
        let store = CartStore::open(&config, Arc::new(MemorySink::new())).unwrap();
        (store, dir)
    }

    #[test]
    fn test_empty_cart_renders_empty_state() {
        let (store, _dir) = store();
        let html = render_cart_sidebar(&store);
        assert!(html.contains("Your cart is empty"));
    }

    #[test]
    fn test_sidebar_shows_totals_and_upsell() {
        let (mut store, _dir) = store();
        store.add_to_cart(&tiered_product(), 3);

        let html = render_cart_sidebar(&store);
        assert!(html.contains("Shopping Cart (3 items)"));
        assert!(html.contains("Rs.300.00"));
        assert!(html.contains("Add 2 more to save Rs.10.00 per unit"));
    }

    #[test]
    fn test_sidebar_shows_savings_banner_at_discount_tier() {
        let (mut store, _dir) = store();
        store.add_to_cart(&tiered_product(), 5);

        let html = render_cart_sidebar(&store);
        assert!(html.contains("You're saving Rs.50.00 with bulk pricing"));
        assert!(html.contains("Rs.450.00"));
    }
}
