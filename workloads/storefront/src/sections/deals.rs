//! Deals showcase renderer.

use chrono::{DateTime, Utc};
use freshcart_data::DealWithProducts;

use crate::ui::render_empty;

/// Render the deals showcase with urgency styling per deal.
pub fn render_deals_showcase(deals: &[DealWithProducts], now: DateTime<Utc>) -> String {
    let active: Vec<&DealWithProducts> =
        deals.iter().filter(|d| d.deal.is_active(now)).collect();
    if active.is_empty() {
        return render_empty("No active deals", "Check back soon for fresh offers");
    }

    let cards = active
        .iter()
        .map(|entry| {
            let urgency = entry.deal.urgency(now);
            format!(
                r#"    <article class="deal-card deal-card--{urgency}" data-deal-id="{id}">
        <h3 class="deal-title">{title}</h3>
        <span class="deal-countdown">Ends in {hours}h</span>
        <span class="deal-product-count">{count} products</span>
    </article>"#,
                urgency = urgency.as_str(),
                id = entry.deal.id,
                title = entry.deal.title,
                hours = entry.deal.hours_left(now),
                count = entry.products.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="deals-showcase" data-section="deals">
    <h2 class="deals-heading">Today's Deals</h2>
{cards}
</section>"#,
        cards = cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use freshcart_commerce::catalog::Deal;
    use freshcart_commerce::ids::DealId;

    fn deal(title: &str, hours: i64, now: DateTime<Utc>) -> DealWithProducts {
        DealWithProducts {
            deal: Deal {
                id: DealId::new("1"),
                title: title.to_string(),
                product_ids: Vec::new(),
                expires_at: now + Duration::hours(hours),
                position: 1,
            },
            products: Vec::new(),
        }
    }

    #[test]
    fn test_showcase_styles_by_urgency() {
        let now = Utc::now();
        let html = render_deals_showcase(&[deal("Flash Sale", 1, now)], now);
        assert!(html.contains("deal-card--critical"));
        assert!(html.contains("Flash Sale"));
    }

    #[test]
    fn test_expired_deals_are_dropped() {
        let now = Utc::now();
        let html = render_deals_showcase(&[deal("Old", -2, now)], now);
        assert!(html.contains("No active deals"));
    }
}
