//! Catalog services over the record store.
//!
//! Each service mirrors one record table and owns the queries and
//! normalization for it. Pages talk to services; only services talk to
//! the raw [`RecordStore`](crate::store::RecordStore).

mod category;
mod deal;
mod product;

pub use category::CategoryService;
pub use deal::{DealService, DealWithProducts};
pub use product::ProductService;
