//! The record-store trait and its in-memory implementation.
//!
//! The remote service is an opaque async data source returning plain
//! records; this trait is the whole contract the storefront has with
//! it. `MemoryRecordStore` backs tests and demos with the same query
//! semantics.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use crate::error::FetchError;
use crate::query::{RecordQuery, SortDir};
use crate::record::{CategoryRecord, DealRecord, ProductRecord};

/// An opaque async source of catalog records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_products(&self, query: &RecordQuery) -> Result<Vec<ProductRecord>, FetchError>;
    async fn get_product(&self, id: i64) -> Result<ProductRecord, FetchError>;
    async fn create_product(&self, record: ProductRecord) -> Result<ProductRecord, FetchError>;
    async fn update_product(&self, record: ProductRecord) -> Result<ProductRecord, FetchError>;
    async fn delete_product(&self, id: i64) -> Result<(), FetchError>;

    async fn fetch_categories(
        &self,
        query: &RecordQuery,
    ) -> Result<Vec<CategoryRecord>, FetchError>;
    async fn get_category(&self, id: i64) -> Result<CategoryRecord, FetchError>;

    async fn fetch_deals(&self, query: &RecordQuery) -> Result<Vec<DealRecord>, FetchError>;
    async fn get_deal(&self, id: i64) -> Result<DealRecord, FetchError>;
    async fn create_deal(&self, record: DealRecord) -> Result<DealRecord, FetchError>;
    async fn update_deal(&self, record: DealRecord) -> Result<DealRecord, FetchError>;
    async fn delete_deal(&self, id: i64) -> Result<(), FetchError>;
}

/// In-memory record store for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    products: Mutex<Vec<ProductRecord>>,
    categories: Mutex<Vec<CategoryRecord>>,
    deals: Mutex<Vec<DealRecord>>,
    next_id: AtomicI64,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            products: Mutex::new(Vec::new()),
            categories: Mutex::new(Vec::new()),
            deals: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed the store with records, assigning ids where missing.
    pub fn seed(
        self,
        products: Vec<ProductRecord>,
        categories: Vec<CategoryRecord>,
        deals: Vec<DealRecord>,
    ) -> Self {
        for mut record in products {
            if record.id == 0 {
                record.id = self.allocate_id();
            }
            lock(&self.products).push(record);
        }
        for mut record in categories {
            if record.id == 0 {
                record.id = self.allocate_id();
            }
            lock(&self.categories).push(record);
        }
        for mut record in deals {
            if record.id == 0 {
                record.id = self.allocate_id();
            }
            lock(&self.deals).push(record);
        }
        self
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Apply a query to a snapshot of records.
fn run_query<T: Serialize + Clone>(records: &[T], query: &RecordQuery) -> Vec<T> {
    let mut rendered: Vec<(Value, T)> = records
        .iter()
        .filter_map(|r| serde_json::to_value(r).ok().map(|v| (v, r.clone())))
        .filter(|(v, _)| query.matches(v))
        .collect();

    if let Some((field, dir)) = &query.order_by {
        rendered.sort_by(|(a, _), (b, _)| {
            let ordering = compare_fields(a.get(field), b.get(field));
            match dir {
                SortDir::Asc => ordering,
                SortDir::Desc => ordering.reverse(),
            }
        });
    }

    rendered
        .into_iter()
        .skip(query.offset)
        .take(query.limit.unwrap_or(usize::MAX))
        .map(|(_, r)| r)
        .collect()
}

fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        // Records missing the sort field sink to the end.
        (Some(x), Some(y)) if !x.is_null() && y.is_null() => Ordering::Less,
        (Some(x), Some(y)) if x.is_null() && !y.is_null() => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn fetch_products(&self, query: &RecordQuery) -> Result<Vec<ProductRecord>, FetchError> {
        Ok(run_query(&lock(&self.products), query))
    }

    async fn get_product(&self, id: i64) -> Result<ProductRecord, FetchError> {
        lock(&self.products)
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(FetchError::NotFound {
                record_type: "product",
                id: id.to_string(),
            })
    }

    async fn create_product(&self, mut record: ProductRecord) -> Result<ProductRecord, FetchError> {
        if record.id == 0 {
            record.id = self.allocate_id();
        }
        lock(&self.products).push(record.clone());
        Ok(record)
    }

    async fn update_product(&self, record: ProductRecord) -> Result<ProductRecord, FetchError> {
        let mut products = lock(&self.products);
        let existing = products
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(FetchError::NotFound {
                record_type: "product",
                id: record.id.to_string(),
            })?;
        *existing = record.clone();
        Ok(record)
    }

    async fn delete_product(&self, id: i64) -> Result<(), FetchError> {
        let mut products = lock(&self.products);
        let before = products.len();
        products.retain(|r| r.id != id);
        if products.len() == before {
            return Err(FetchError::NotFound {
                record_type: "product",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn fetch_categories(
        &self,
        query: &RecordQuery,
    ) -> Result<Vec<CategoryRecord>, FetchError> {
        Ok(run_query(&lock(&self.categories), query))
    }

    async fn get_category(&self, id: i64) -> Result<CategoryRecord, FetchError> {
        lock(&self.categories)
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(FetchError::NotFound {
                record_type: "category",
                id: id.to_string(),
            })
    }

    async fn fetch_deals(&self, query: &RecordQuery) -> Result<Vec<DealRecord>, FetchError> {
        Ok(run_query(&lock(&self.deals), query))
    }

    async fn get_deal(&self, id: i64) -> Result<DealRecord, FetchError> {
        lock(&self.deals)
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(FetchError::NotFound {
                record_type: "deal",
                id: id.to_string(),
            })
    }

    async fn create_deal(&self, mut record: DealRecord) -> Result<DealRecord, FetchError> {
        if record.id == 0 {
            record.id = self.allocate_id();
        }
        lock(&self.deals).push(record.clone());
        Ok(record)
    }

    async fn update_deal(&self, record: DealRecord) -> Result<DealRecord, FetchError> {
        let mut deals = lock(&self.deals);
        let existing = deals
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(FetchError::NotFound {
                record_type: "deal",
                id: record.id.to_string(),
            })?;
        *existing = record.clone();
        Ok(record)
    }

    async fn delete_deal(&self, id: i64) -> Result<(), FetchError> {
        let mut deals = lock(&self.deals);
        let before = deals.len();
        deals.retain(|r| r.id != id);
        if deals.len() == before {
            return Err(FetchError::NotFound {
                record_type: "deal",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
