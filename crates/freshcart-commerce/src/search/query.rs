//! Search query builder.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::catalog::Product;
use crate::search::{Filter, Pagination, SearchResults};

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by name A-Z.
    #[default]
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by base-tier price, low to high.
    PriceAsc,
    /// Sort by base-tier price, high to low.
    PriceDesc,
    /// Sort by featured carousel position.
    FeaturedOrder,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::FeaturedOrder => "Featured",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::NameAsc => a.name.cmp(&b.name),
            SortOption::NameDesc => b.name.cmp(&a.name),
            SortOption::PriceAsc => a.base_price().cmp(&b.base_price()),
            SortOption::PriceDesc => b.base_price().cmp(&a.base_price()),
            // Unordered products sink to the end of the carousel.
            SortOption::FeaturedOrder => match (a.featured_order, b.featured_order) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.name.cmp(&b.name),
            },
        }
    }
}

/// A client-side search over loaded products.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    /// Text query, if any.
    pub query: Option<String>,
    /// Filters to apply (ANDed together).
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl SearchQuery {
    /// Create a new search query with default pagination.
    pub fn new() -> Self {
        Self {
            query: None,
            filters: Vec::new(),
            sort: SortOption::default(),
            page: 1,
            per_page: 24,
        }
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.is_empty() {
            self.query = Some(q.clone());
            self.filters.push(Filter::Text(q));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Run the query over a slice of products.
    pub fn execute(&self, products: &[Product]) -> SearchResults<Product> {
        let mut matched: Vec<Product> = products
            .iter()
            .filter(|p| self.filters.iter().all(|f| f.matches(p)))
            .cloned()
            .collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));

        let pagination = Pagination::new(self.page, self.per_page, matched.len() as i64);
        let start = (pagination.offset() as usize).min(matched.len());
        let end = (start + self.per_page as usize).min(matched.len());
        SearchResults {
            items: matched[start..end].to_vec(),
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};
    use crate::pricing::{PriceTier, TierSchedule};

    fn product(id: &str, name: &str, category: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            images: Vec::new(),
            description: String::new(),
            in_stock: true,
            stock: None,
            tiers: TierSchedule::new(vec![PriceTier::new(
                1,
                Money::from_decimal(price, Currency::INR),
                0,
            )])
            .unwrap(),
            featured: false,
            featured_order: None,
            trending: false,
            deal_id: None,
            dietary_tags: Vec::new(),
            frequently_bought_with: Vec::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Bananas", "Fruits", 40.0),
            product("2", "Apples", "Fruits", 120.0),
            product("3", "Milk", "Dairy", 60.0),
            product("4", "Paneer", "Dairy", 90.0),
        ]
    }

    #[test]
    fn test_text_search_with_category_filter() {
        let results = SearchQuery::new()
            .with_query("a")
            .with_filter(Filter::category("Fruits"))
            .execute(&catalog());

        let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apples", "Bananas"]);
    }

    #[test]
    fn test_sort_by_price() {
        let results = SearchQuery::new()
            .with_sort(SortOption::PriceAsc)
            .execute(&catalog());
        let prices: Vec<i64> = results
            .items
            .iter()
            .map(|p| p.base_price().amount_cents)
            .collect();
        assert_eq!(prices, vec![4000, 6000, 9000, 12000]);
    }

    #[test]
    fn test_pagination() {
        let results = SearchQuery::new()
            .with_pagination(2, 3)
            .execute(&catalog());
        assert_eq!(results.items.len(), 1);
        assert_eq!(results.pagination.total, 4);
        assert_eq!(results.pagination.total_pages, 2);
        assert!(!results.pagination.has_next);
        assert!(results.pagination.has_prev);
    }

    #[test]
    fn test_featured_order_sort_sinks_unordered() {
        let mut products = catalog();
        products[2].featured_order = Some(1);
        products[0].featured_order = Some(2);

        let results = SearchQuery::new()
            .with_sort(SortOption::FeaturedOrder)
            .execute(&products);
        let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Bananas", "Apples", "Paneer"]);
    }
}
