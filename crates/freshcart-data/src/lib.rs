//! Remote record-store boundary and catalog services for FreshCart.
//!
//! The remote service is an opaque async source of plain records. This
//! crate owns everything about that boundary:
//!
//! - raw wire record shapes and their normalization into domain types
//!   (list fields that arrive joined or structured, tier lists that
//!   arrive as arrays or JSON strings)
//! - the [`RecordStore`] trait and an in-memory implementation
//! - per-table services with the storefront's queries and admin CRUD
//! - retry policy and stale-response discarding for page fetches

pub mod config;
pub mod error;
pub mod form;
pub mod query;
pub mod record;
pub mod retry;
pub mod services;
pub mod store;
pub mod view;

pub use config::ApiConfig;
pub use error::FetchError;
pub use form::{DealForm, ProductForm, TierInput};
pub use query::{Condition, ConditionGroup, RecordQuery, SortDir};
pub use record::{CategoryRecord, DealRecord, ListField, ProductRecord};
pub use retry::{BackoffStrategy, RetryPolicy};
pub use services::{CategoryService, DealService, DealWithProducts, ProductService};
pub use store::{MemoryRecordStore, RecordStore};
pub use view::{FetchTicket, ViewGeneration};
