//! Site header renderer.

/// Render the header with the cart badge.
///
/// The badge is hidden while the cart is empty, matching the mobile
/// nav behavior.
pub fn render_header(cart_item_count: i64) -> String {
    let badge = if cart_item_count > 0 {
        format!(r#"<span class="cart-badge">{cart_item_count}</span>"#)
    } else {
        String::new()
    };

    format!(
        r#"<header class="site-header" data-section="header">
    <a class="site-logo" href="/">FreshCart</a>
    <nav class="site-nav">
        <a href="/categories">Categories</a>
        <a href="/deals">Deals</a>
        <a href="/search">Search</a>
    </nav>
    <a class="cart-link" href="/cart">Cart{badge}</a>
</header>"#,
        badge = badge
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_reflects_item_count() {
        let html = render_header(7);
        assert!(html.contains(r#"<span class="cart-badge">7</span>"#));
    }

    #[test]
    fn test_badge_hidden_when_empty() {
        let html = render_header(0);
        assert!(!html.contains("cart-badge"));
    }
}
