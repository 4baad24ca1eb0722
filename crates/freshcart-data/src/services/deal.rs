//! Deals showcase service.
//!
//! Deals reference products by id; every read enriches the deal with
//! its normalized products so the showcase renders from one value. The
//! per-deal product fetches run concurrently.

use chrono::{DateTime, SecondsFormat, Utc};
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;

use freshcart_commerce::catalog::{Deal, Product};
use freshcart_commerce::ids::DealId;
use freshcart_commerce::money::Currency;

use crate::error::FetchError;
use crate::form::DealForm;
use crate::query::{Condition, RecordQuery, SortDir};
use crate::store::RecordStore;

/// A deal together with its resolved products.
#[derive(Debug, Clone)]
pub struct DealWithProducts {
    pub deal: Deal,
    pub products: Vec<Product>,
}

/// Service for deal records.
pub struct DealService<S> {
    store: Arc<S>,
    currency: Currency,
}

impl<S: RecordStore> DealService<S> {
    /// Create a service over a record store.
    pub fn new(store: Arc<S>, currency: Currency) -> Self {
        Self { store, currency }
    }

    /// All deals in showcase order, with products attached.
    pub async fn all(&self) -> Result<Vec<DealWithProducts>, FetchError> {
        let query = RecordQuery::new().order_by("position", SortDir::Asc);
        let deals: Vec<Deal> = self
            .store
            .fetch_deals(&query)
            .await?
            .into_iter()
            .map(|r| r.into_deal())
            .collect();
        self.enrich(deals).await
    }

    /// Deals that have not yet expired, in showcase order.
    pub async fn active(&self, now: DateTime<Utc>) -> Result<Vec<DealWithProducts>, FetchError> {
        let cutoff = now.to_rfc3339_opts(SecondsFormat::Secs, true);
        let query = RecordQuery::new()
            .filter(Condition::GreaterThan("expiresAt".into(), json!(cutoff)))
            .order_by("position", SortDir::Asc);
        let deals: Vec<Deal> = self
            .store
            .fetch_deals(&query)
            .await?
            .into_iter()
            .map(|r| r.into_deal())
            .collect();
        self.enrich(deals).await
    }

    /// A single deal by id, with products attached.
    pub async fn by_id(&self, id: &DealId) -> Result<DealWithProducts, FetchError> {
        let record = self.store.get_deal(parse_id(id)?).await?;
        let deal = record.into_deal();
        let products = self.products_for(&deal).await?;
        Ok(DealWithProducts { deal, products })
    }

    /// Create a deal from the admin form.
    pub async fn create(&self, form: DealForm) -> Result<Deal, FetchError> {
        let created = self.store.create_deal(form.into_record(0)).await?;
        tracing::debug!(id = created.id, "created deal");
        Ok(created.into_deal())
    }

    /// Replace a deal from the admin form.
    pub async fn update(&self, id: &DealId, form: DealForm) -> Result<Deal, FetchError> {
        let updated = self.store.update_deal(form.into_record(parse_id(id)?)).await?;
        Ok(updated.into_deal())
    }

    /// Delete a deal.
    pub async fn delete(&self, id: &DealId) -> Result<(), FetchError> {
        self.store.delete_deal(parse_id(id)?).await
    }

    async fn enrich(&self, deals: Vec<Deal>) -> Result<Vec<DealWithProducts>, FetchError> {
        let enriched = join_all(deals.into_iter().map(|deal| async move {
            let products = self.products_for(&deal).await?;
            Ok(DealWithProducts { deal, products })
        }))
        .await;
        enriched.into_iter().collect()
    }

    async fn products_for(&self, deal: &Deal) -> Result<Vec<Product>, FetchError> {
        let ids: Vec<serde_json::Value> = deal
            .product_ids
            .iter()
            .filter_map(|id| id.as_str().parse::<i64>().ok())
            .map(|n| json!(n))
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = RecordQuery::new().filter(Condition::OneOf("Id".into(), ids));
        self.store
            .fetch_products(&query)
            .await?
            .into_iter()
            .map(|r| r.into_product(self.currency))
            .collect()
    }
}

fn parse_id(id: &DealId) -> Result<i64, FetchError> {
    id.as_str().parse().map_err(|_| FetchError::NotFound {
        record_type: "deal",
        id: id.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DealRecord, ListField, ProductRecord};
    use crate::store::MemoryRecordStore;
    use chrono::Duration;

    fn product(id: i64, name: &str) -> ProductRecord {
        ProductRecord {
            id,
            name: name.to_string(),
            category: "Fruits".to_string(),
            price_tiers: json!([{"minQuantity": 1, "price": 40.0, "discountPercentage": 0}]),
            ..ProductRecord::default()
        }
    }

    fn deal(id: i64, title: &str, product_ids: &str, hours: i64, position: i32) -> DealRecord {
        DealRecord {
            id,
            title: title.to_string(),
            product_ids: ListField::Joined(product_ids.to_string()),
            expires_at: Utc::now() + Duration::hours(hours),
            position,
        }
    }

    fn service() -> DealService<MemoryRecordStore> {
        let store = MemoryRecordStore::new().seed(
            vec![product(1, "Bananas"), product(2, "Apples")],
            Vec::new(),
            vec![
                deal(1, "Weekend Fruit Fest", "1,2", 24, 2),
                deal(2, "Flash Sale", "1", 1, 1),
                deal(3, "Expired Combo", "2", -5, 3),
            ],
        );
        DealService::new(Arc::new(store), Currency::INR)
    }

    #[tokio::test]
    async fn test_all_orders_by_position_and_enriches() {
        let deals = service().all().await.unwrap();
        let titles: Vec<&str> = deals.iter().map(|d| d.deal.title.as_str()).collect();
        assert_eq!(titles, vec!["Flash Sale", "Weekend Fruit Fest", "Expired Combo"]);
        assert_eq!(deals[1].products.len(), 2);
    }

    #[tokio::test]
    async fn test_active_excludes_expired() {
        let deals = service().active(Utc::now()).await.unwrap();
        let titles: Vec<&str> = deals.iter().map(|d| d.deal.title.as_str()).collect();
        assert_eq!(titles, vec!["Flash Sale", "Weekend Fruit Fest"]);
    }

    #[tokio::test]
    async fn test_by_id_enriches_products() {
        let deal = service().by_id(&DealId::new("2")).await.unwrap();
        assert_eq!(deal.deal.title, "Flash Sale");
        assert_eq!(deal.products.len(), 1);
        assert_eq!(deal.products[0].name, "Bananas");
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let svc = service();
        let created = svc
            .create(DealForm {
                title: "Midweek Dairy".to_string(),
                product_ids: vec!["2".to_string()],
                expires_at: Utc::now() + Duration::hours(12),
                position: 4,
            })
            .await
            .unwrap();

        let updated = svc
            .update(
                &created.id,
                DealForm {
                    title: "Midweek Dairy Extended".to_string(),
                    product_ids: vec!["1".to_string(), "2".to_string()],
                    expires_at: Utc::now() + Duration::hours(36),
                    position: 4,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Midweek Dairy Extended");
        assert_eq!(updated.product_ids.len(), 2);

        svc.delete(&created.id).await.unwrap();
        assert!(svc.by_id(&created.id).await.is_err());
    }
}
