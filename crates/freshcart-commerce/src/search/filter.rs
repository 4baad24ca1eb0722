//! Search filter predicates.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A predicate over products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Case-insensitive match against name, description, or category.
    Text(String),
    /// Exact category name.
    Category(String),
    /// Only orderable products.
    InStock,
    /// Carries the given dietary tag.
    DietaryTag(String),
    /// Featured products only.
    Featured,
    /// Trending products only.
    Trending,
}

impl Filter {
    /// Create a text filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create a category filter.
    pub fn category(name: impl Into<String>) -> Self {
        Filter::Category(name.into())
    }

    /// Create a dietary-tag filter.
    pub fn dietary_tag(tag: impl Into<String>) -> Self {
        Filter::DietaryTag(tag.into())
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(query) => {
                let needle = query.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
                    || product.category.to_lowercase().contains(&needle)
            }
            Filter::Category(name) => product.category.eq_ignore_ascii_case(name),
            Filter::InStock => product.is_available(),
            Filter::DietaryTag(tag) => product.has_dietary_tag(tag),
            Filter::Featured => product.featured,
            Filter::Trending => product.trending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::pricing::TierSchedule;

    fn product(name: &str, category: &str, tags: &[&str]) -> Product {
        Product {
            id: ProductId::new("1"),
            name: name.to_string(),
            category: category.to_string(),
            images: Vec::new(),
            description: format!("Fresh {name} from local farms"),
            in_stock: true,
            stock: None,
            tiers: TierSchedule::empty(),
            featured: false,
            featured_order: None,
            trending: false,
            deal_id: None,
            dietary_tags: tags.iter().map(|t| t.to_string()).collect(),
            frequently_bought_with: Vec::new(),
        }
    }

    #[test]
    fn test_text_matches_name_description_or_category() {
        let p = product("Organic Bananas", "Fruits", &[]);
        assert!(Filter::text("banana").matches(&p));
        assert!(Filter::text("FARMS").matches(&p));
        assert!(Filter::text("fruit").matches(&p));
        assert!(!Filter::text("dairy").matches(&p));
    }

    #[test]
    fn test_category_filter() {
        let p = product("Milk", "Dairy", &[]);
        assert!(Filter::category("dairy").matches(&p));
        assert!(!Filter::category("Fruits").matches(&p));
    }

    #[test]
    fn test_dietary_tag_filter() {
        let p = product("Almond Milk", "Dairy", &["Vegan", "Organic"]);
        assert!(Filter::dietary_tag("vegan").matches(&p));
        assert!(!Filter::dietary_tag("Gluten-Free").matches(&p));
    }

    #[test]
    fn test_in_stock_filter() {
        let mut p = product("Milk", "Dairy", &[]);
        assert!(Filter::InStock.matches(&p));
        p.in_stock = false;
        assert!(!Filter::InStock.matches(&p));
    }
}
