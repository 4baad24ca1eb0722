//! Product catalog service.

use serde_json::json;
use std::sync::Arc;

use freshcart_commerce::catalog::Product;
use freshcart_commerce::ids::ProductId;
use freshcart_commerce::money::Currency;

use crate::error::FetchError;
use crate::form::ProductForm;
use crate::query::{Condition, RecordQuery, SortDir};
use crate::record::ProductRecord;
use crate::store::RecordStore;

/// Service for product records.
pub struct ProductService<S> {
    store: Arc<S>,
    currency: Currency,
}

impl<S: RecordStore> ProductService<S> {
    /// Create a service over a record store.
    pub fn new(store: Arc<S>, currency: Currency) -> Self {
        Self { store, currency }
    }

    /// All products, ordered by name.
    pub async fn all(&self) -> Result<Vec<Product>, FetchError> {
        let query = RecordQuery::new().order_by("Name", SortDir::Asc);
        self.normalize(self.store.fetch_products(&query).await?)
    }

    /// A single product by id.
    pub async fn by_id(&self, id: &ProductId) -> Result<Product, FetchError> {
        let record = self.store.get_product(parse_id(id)?).await?;
        record.into_product(self.currency)
    }

    /// Products in a category, ordered by name.
    pub async fn by_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        let query = RecordQuery::new()
            .filter(Condition::Eq("category".into(), json!(category)))
            .order_by("Name", SortDir::Asc);
        self.normalize(self.store.fetch_products(&query).await?)
    }

    /// Products in the featured carousel, in carousel order.
    pub async fn featured(&self) -> Result<Vec<Product>, FetchError> {
        let query = RecordQuery::new()
            .filter(Condition::Eq("featured".into(), json!(true)))
            .order_by("featuredOrder", SortDir::Asc);
        self.normalize(self.store.fetch_products(&query).await?)
    }

    /// Trending products, ordered by name.
    pub async fn trending(&self) -> Result<Vec<Product>, FetchError> {
        let query = RecordQuery::new()
            .filter(Condition::Eq("trending".into(), json!(true)))
            .order_by("Name", SortDir::Asc);
        self.normalize(self.store.fetch_products(&query).await?)
    }

    /// Text search across name, description, and category, optionally
    /// narrowed to one category.
    pub async fn search(
        &self,
        text: &str,
        category: Option<&str>,
    ) -> Result<Vec<Product>, FetchError> {
        let mut query = RecordQuery::new();
        if !text.is_empty() {
            query = query.any_of(vec![
                Condition::Contains("Name".into(), text.to_string()),
                Condition::Contains("description".into(), text.to_string()),
                Condition::Contains("category".into(), text.to_string()),
            ]);
        }
        if let Some(category) = category {
            query = query.filter(Condition::Eq("category".into(), json!(category)));
        }
        self.normalize(self.store.fetch_products(&query).await?)
    }

    /// Products from the same category, excluding the product itself.
    pub async fn recommended(
        &self,
        id: &ProductId,
        limit: usize,
    ) -> Result<Vec<Product>, FetchError> {
        let numeric_id = parse_id(id)?;
        let current = self.store.get_product(numeric_id).await?;
        let query = RecordQuery::new()
            .filter(Condition::Eq("category".into(), json!(current.category)))
            .filter(Condition::NotEq("Id".into(), json!(numeric_id)))
            .limit(limit);
        self.normalize(self.store.fetch_products(&query).await?)
    }

    /// Companion products from the `frequentlyBoughtWith` list.
    pub async fn frequently_bought_with(
        &self,
        id: &ProductId,
        limit: usize,
    ) -> Result<Vec<Product>, FetchError> {
        let current = self.store.get_product(parse_id(id)?).await?;
        let companion_ids: Vec<serde_json::Value> = current
            .frequently_bought_with
            .to_vec()
            .iter()
            .filter_map(|raw| raw.parse::<i64>().ok())
            .map(|n| json!(n))
            .collect();
        if companion_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = RecordQuery::new()
            .filter(Condition::OneOf("Id".into(), companion_ids))
            .limit(limit);
        self.normalize(self.store.fetch_products(&query).await?)
    }

    /// Deduct sold units from a product's stock count.
    ///
    /// An unknown stock count stays unknown; the service never invents
    /// a number for it.
    pub async fn update_stock(
        &self,
        id: &ProductId,
        quantity_sold: i64,
    ) -> Result<Product, FetchError> {
        let mut record = self.store.get_product(parse_id(id)?).await?;
        if let Some(count) = record.stock_count {
            let remaining = (count - quantity_sold).max(0);
            record.stock_count = Some(remaining);
            record.in_stock = remaining > 0;
        }
        let updated = self.store.update_product(record).await?;
        updated.into_product(self.currency)
    }

    /// Create a product from the admin form.
    pub async fn create(&self, form: ProductForm) -> Result<Product, FetchError> {
        let created = self.store.create_product(form.into_record(0)).await?;
        tracing::debug!(id = created.id, "created product");
        created.into_product(self.currency)
    }

    /// Replace a product from the admin form.
    pub async fn update(&self, id: &ProductId, form: ProductForm) -> Result<Product, FetchError> {
        let updated = self
            .store
            .update_product(form.into_record(parse_id(id)?))
            .await?;
        updated.into_product(self.currency)
    }

    /// Delete a product.
    pub async fn delete(&self, id: &ProductId) -> Result<(), FetchError> {
        self.store.delete_product(parse_id(id)?).await
    }

    /// Persist a new featured-carousel order: position follows the
    /// slice order, 1-indexed.
    pub async fn set_featured_order(&self, ids: &[ProductId]) -> Result<(), FetchError> {
        for (index, id) in ids.iter().enumerate() {
            let mut record = self.store.get_product(parse_id(id)?).await?;
            record.featured_order = Some(index as i32 + 1);
            self.store.update_product(record).await?;
        }
        Ok(())
    }

    fn normalize(&self, records: Vec<ProductRecord>) -> Result<Vec<Product>, FetchError> {
        records
            .into_iter()
            .map(|r| r.into_product(self.currency))
            .collect()
    }
}

fn parse_id(id: &ProductId) -> Result<i64, FetchError> {
    id.as_str().parse().map_err(|_| FetchError::NotFound {
        record_type: "product",
        id: id.as_str().to_string(),
    })
}
