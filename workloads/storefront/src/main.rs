//! FreshCart storefront demo.
//!
//! Seeds an in-memory record store, drives the cart through a short
//! shopping session, and prints the rendered sections. Useful for
//! eyeballing section output without a browser.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use serde_json::json;

use freshcart_data::{
    CategoryRecord, DealRecord, DealService, ListField, MemoryRecordStore, ProductRecord,
    ProductService,
};
use freshcart_store::{CartStore, TracingSink};
use freshcart_storefront::sections::{
    render_cart_sidebar, render_deals_showcase, render_header, render_product_card,
    render_quantity_selector,
};
use freshcart_storefront::FreshcartConfig;

#[derive(Debug, Parser)]
#[command(name = "freshcart", about = "Render the FreshCart storefront demo")]
struct Args {
    /// Path to a freshcart.toml configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => FreshcartConfig::load(path)?,
        None => FreshcartConfig::default(),
    };
    let currency = config.currency()?;

    let records = Arc::new(seed_records());
    let products = ProductService::new(records.clone(), currency);
    let deals = DealService::new(records.clone(), currency);

    let mut cart = CartStore::open(&config.store, Arc::new(TracingSink))?;

    println!("{}\n", render_header(cart.item_count()));

    let catalog = products.all().await?;
    for product in &catalog {
        println!("{}\n", render_product_card(product));
    }

    let showcase = deals.active(Utc::now()).await?;
    println!("{}\n", render_deals_showcase(&showcase, Utc::now()));

    // A short shopping session: 3 bananas, then 7 more, which crosses
    // into the 10+ bulk tier on a single merged line.
    if let Some(bananas) = catalog.iter().find(|p| p.name.contains("Banana")) {
        cart.add_to_cart(bananas, 3);
        println!("{}\n", render_quantity_selector(&bananas.tiers, 3));
        cart.add_to_cart(bananas, 7);
    }

    println!("{}\n", render_cart_sidebar(&cart));
    println!("{}", render_header(cart.item_count()));

    Ok(())
}

/// Seed records in both wire shapes the remote store produces.
fn seed_records() -> MemoryRecordStore {
    let products = vec![
        ProductRecord {
            id: 1,
            name: "Organic Bananas".to_string(),
            category: "Fruits".to_string(),
            images: ListField::Joined("https://img.freshcart.example/bananas.jpg".to_string()),
            description: "Sweet organic bananas from local farms".to_string(),
            price_tiers: json!([
                {"minQuantity": 1, "price": 100.0, "discountPercentage": 0},
                {"minQuantity": 5, "price": 90.0, "discountPercentage": 10},
                {"minQuantity": 10, "price": 80.0, "discountPercentage": 20}
            ]),
            in_stock: true,
            stock_count: Some(40),
            featured: true,
            featured_order: Some(1),
            trending: true,
            dietary_tags: ListField::Joined("Organic".to_string()),
            ..ProductRecord::default()
        },
        ProductRecord {
            id: 2,
            name: "Almond Milk".to_string(),
            category: "Dairy".to_string(),
            description: "Unsweetened almond milk, 1L".to_string(),
            // Tier list as a JSON-encoded string, as some records arrive.
            price_tiers: json!(
                r#"[{"minQuantity":1,"price":180.0,"discountPercentage":0},{"minQuantity":3,"price":160.0,"discountPercentage":11}]"#
            ),
            in_stock: true,
            dietary_tags: ListField::Items(vec!["Vegan".to_string(), "Gluten-Free".to_string()]),
            frequently_bought_with: ListField::Joined("1".to_string()),
            ..ProductRecord::default()
        },
        ProductRecord {
            id: 3,
            name: "Paneer Block".to_string(),
            category: "Dairy".to_string(),
            description: "Fresh paneer, 200g".to_string(),
            price_tiers: json!([
                {"minQuantity": 1, "price": 95.0, "discountPercentage": 0}
            ]),
            in_stock: false,
            stock_count: Some(0),
            ..ProductRecord::default()
        },
    ];

    let categories = vec![
        CategoryRecord {
            id: 1,
            name: "Fruits".to_string(),
            icon: Some("apple".to_string()),
            image: None,
        },
        CategoryRecord {
            id: 2,
            name: "Dairy".to_string(),
            icon: Some("milk".to_string()),
            image: None,
        },
    ];

    let deals = vec![DealRecord {
        id: 1,
        title: "Weekend Fruit Fest".to_string(),
        product_ids: ListField::Joined("1".to_string()),
        expires_at: Utc::now() + Duration::hours(8),
        position: 1,
    }];

    MemoryRecordStore::new().seed(products, categories, deals)
}
