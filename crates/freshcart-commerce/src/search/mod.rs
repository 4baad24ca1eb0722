//! Catalog search module.
//!
//! Filters are predicates evaluated over loaded products; the remote
//! record store does its own server-side querying, and this module
//! covers the storefront's client-side narrowing (search page, dietary
//! filter) plus sorting and pagination.

mod filter;
mod query;
mod results;

pub use filter::Filter;
pub use query::{SearchQuery, SortOption};
pub use results::{Pagination, SearchResults};
