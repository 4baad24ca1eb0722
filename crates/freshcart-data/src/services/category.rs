//! Category navigation service.

use std::sync::Arc;

use freshcart_commerce::catalog::Category;
use freshcart_commerce::ids::CategoryId;

use crate::error::FetchError;
use crate::query::{RecordQuery, SortDir};
use crate::store::RecordStore;

/// Service for category records.
pub struct CategoryService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> CategoryService<S> {
    /// Create a service over a record store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All categories, ordered by name.
    pub async fn all(&self) -> Result<Vec<Category>, FetchError> {
        let query = RecordQuery::new().order_by("Name", SortDir::Asc);
        let records = self.store.fetch_categories(&query).await?;
        Ok(records.into_iter().map(|r| r.into_category()).collect())
    }

    /// A single category by id.
    pub async fn by_id(&self, id: &CategoryId) -> Result<Category, FetchError> {
        let numeric_id = id.as_str().parse().map_err(|_| FetchError::NotFound {
            record_type: "category",
            id: id.as_str().to_string(),
        })?;
        let record = self.store.get_category(numeric_id).await?;
        Ok(record.into_category())
    }
}
