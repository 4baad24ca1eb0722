//! Persisted cart store and local key-value storage for FreshCart.
//!
//! The [`CartStore`] owns the authoritative cart and is the entire
//! mutation surface other components are allowed to use:
//! `add_to_cart`, `update_quantity`, `remove_from_cart`, `clear_cart`,
//! `cart_total`, `item_count`. Every mutation is persisted to a
//! file-backed [`KvStore`] and emits a user-facing [`Notification`].

mod cart_store;
mod config;
mod error;
mod kv;
mod notify;

pub use cart_store::CartStore;
pub use config::{StoreConfig, DEFAULT_CART_KEY};
pub use error::StoreError;
pub use kv::KvStore;
pub use notify::{
    MemorySink, Notification, NotificationLevel, NotificationSink, TracingSink,
};
