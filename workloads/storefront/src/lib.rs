//! FreshCart storefront presentation layer.
//!
//! Section renderers and shared UI states over the commerce core. All
//! cart reads go through the cart store's public surface; nothing in
//! this crate mutates line items directly.

pub mod config;
pub mod sections;
pub mod ui;

pub use config::FreshcartConfig;
