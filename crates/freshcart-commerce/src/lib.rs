//! Storefront domain types and logic for FreshCart.
//!
//! This crate is the pure core of the storefront: no I/O, no async,
//! no persistence.
//!
//! - **Pricing**: quantity price tiers and tier resolution
//! - **Cart**: the cart aggregate with per-line tier re-resolution
//! - **Catalog**: products, categories, time-limited deals
//! - **Search**: client-side filtering, sorting, pagination
//!
//! # Example
//!
//! ```
//! use freshcart_commerce::money::{Currency, Money};
//! use freshcart_commerce::pricing::{PriceTier, TierSchedule};
//!
//! let tiers = TierSchedule::new(vec![
//!     PriceTier::new(1, Money::from_decimal(100.0, Currency::INR), 0),
//!     PriceTier::new(10, Money::from_decimal(80.0, Currency::INR), 20),
//! ])
//! .unwrap();
//!
//! let quote = tiers.quote(12);
//! assert_eq!(quote.tier.min_quantity, 10);
//! assert_eq!(quote.line_total.display(), "Rs.960.00");
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod pricing;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Pricing
    pub use crate::pricing::{
        DiscountBadge, NextTierIncentive, PriceTier, TierQuote, TierSchedule,
    };

    // Cart
    pub use crate::cart::{Cart, LineItem};

    // Catalog
    pub use crate::catalog::{Category, Deal, DealUrgency, Product};

    // Search
    pub use crate::search::{Filter, Pagination, SearchQuery, SearchResults, SortOption};
}
