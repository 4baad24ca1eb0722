//! Product card renderer.

use freshcart_commerce::catalog::Product;

/// Render a product card for listings and carousels.
pub fn render_product_card(product: &Product) -> String {
    let badge = {
        let badge = product.discount_badge();
        if badge.has_discount {
            format!(
                r#"<span class="badge badge-discount">Up to {}% OFF</span>"#,
                badge.max_discount
            )
        } else {
            String::new()
        }
    };

    let image = product
        .primary_image()
        .map(|url| format!(r#"<img class="card-image" src="{}" alt="{}">"#, url, product.name))
        .unwrap_or_else(|| r#"<div class="card-image card-image--placeholder"></div>"#.to_string());

    let stock_overlay = if product.is_available() {
        String::new()
    } else {
        r#"<div class="card-overlay">Out of Stock</div>"#.to_string()
    };

    let tags = product
        .dietary_tags
        .iter()
        .map(|tag| format!(r#"<span class="chip chip-dietary">{tag}</span>"#))
        .collect::<Vec<_>>()
        .join("\n        ");

    let add_button = if product.is_available() {
        format!(
            r#"<button class="add-to-cart" type="button" data-product-id="{}">Add to Cart</button>"#,
            product.id
        )
    } else {
        r#"<button class="add-to-cart" type="button" disabled>Out of Stock</button>"#.to_string()
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    {image}
    {stock_overlay}
    <div class="card-body">
        {badge}
        <h3 class="card-name">{name}</h3>
        <p class="card-category">{category}</p>
        {tags}
        <span class="card-price">{price}</span>
        {add_button}
    </div>
</article>"#,
        id = product.id,
        image = image,
        stock_overlay = stock_overlay,
        badge = badge,
        name = product.name,
        category = product.category,
        tags = tags,
        price = product.base_price().display(),
        add_button = add_button
    )
}
