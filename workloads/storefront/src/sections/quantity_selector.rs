//! Quantity selector with the tier table.

use freshcart_commerce::pricing::TierSchedule;

/// Render the quantity selector and its bulk-pricing table.
///
/// The row for the currently applicable tier is highlighted; rows whose
/// threshold has not been reached are shown but dimmed.
pub fn render_quantity_selector(tiers: &TierSchedule, quantity: i64) -> String {
    let selected = tiers.resolve(quantity);
    let base_price = tiers.base_price();

    let mut rows: Vec<_> = tiers.tiers().to_vec();
    rows.sort_by_key(|t| t.min_quantity);

    let tier_rows = rows
        .iter()
        .map(|tier| {
            let mut classes = vec!["tier-row"];
            if tier.min_quantity == selected.min_quantity {
                classes.push("tier-row--active");
            }
            if quantity < tier.min_quantity {
                classes.push("tier-row--locked");
            }

            let discount = if tier.discount_percentage > 0 {
                format!(
                    r#"<span class="tier-discount">{}% OFF</span>"#,
                    tier.discount_percentage
                )
            } else {
                String::new()
            };

            let savings = base_price
                .try_subtract(&tier.price)
                .filter(|s| s.is_positive())
                .map(|s| format!(r#"<span class="tier-savings">Save {} each</span>"#, s.display()))
                .unwrap_or_default();

            format!(
                r#"        <li class="{classes}">
            <span class="tier-threshold">{min}+ items</span>
            {discount}
            <span class="tier-price">{price} each</span>
            {savings}
        </li>"#,
                classes = classes.join(" "),
                min = tier.min_quantity,
                discount = discount,
                price = tier.price.display(),
                savings = savings
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="quantity-selector" data-section="quantity">
    <div class="quantity-controls">
        <button class="quantity-step" type="button" data-action="decrement">-</button>
        <input class="quantity-input" type="number" min="1" value="{quantity}">
        <button class="quantity-step" type="button" data-action="increment">+</button>
    </div>
    <ul class="tier-table">
{tier_rows}
    </ul>
</section>"#,
        quantity = quantity,
        tier_rows = tier_rows
    )
}
