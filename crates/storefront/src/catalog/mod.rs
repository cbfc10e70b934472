//! Synthetic product catalog.
//!
//! The catalog is generated once at startup ([`generator::generate`]) and
//! never mutated; queries against it go through [`CatalogClient`], which
//! emulates a remote product API: answers are produced asynchronously with
//! configurable artificial latency so callers can exercise loading states.

pub mod client;
pub mod generator;

use megashop_core::{Category, Price, ProductId};
use serde::{Deserialize, Serialize};

pub use client::CatalogClient;

/// A catalog product.
///
/// Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Current catalog price.
    pub price: Price,
    /// Assigned category.
    pub category: Category,
    /// Review rating, one decimal place, 3.0-5.0.
    pub rating: f32,
    /// Image reference.
    pub image: String,
}

/// Filter criteria for a catalog query.
///
/// Transient: held by the catalog browser for the current page view and
/// never persisted. An empty query string and unset bounds match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Free-text title query (case-insensitive substring match).
    pub query: String,
    /// Restrict to a single category, if set.
    pub category: Option<Category>,
    /// Inclusive lower price bound, if set.
    pub min_price: Option<Price>,
    /// Inclusive upper price bound, if set.
    pub max_price: Option<Price>,
}

impl ProductFilter {
    /// Whether `product` satisfies every criterion of this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let title_matches = product
            .title
            .to_lowercase()
            .contains(&self.query.to_lowercase());
        let category_matches = self.category.is_none_or(|c| c == product.category);
        let above_min = self.min_price.is_none_or(|min| product.price >= min);
        let below_max = self.max_price.is_none_or(|max| product.price <= max);

        title_matches && category_matches && above_min && below_max
    }
}

/// One page of catalog query results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// The products on the requested page (may be empty past the last page).
    pub items: Vec<Product>,
    /// Total number of products matching the filter, across all pages.
    pub total: usize,
    /// Number of pages; at least 1 even for an empty result.
    pub page_count: u32,
}

impl ProductPage {
    /// An empty result set (total 0, a single empty page).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page_count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, price: u32, category: Category) -> Product {
        Product {
            id: ProductId::new(1),
            title: title.to_owned(),
            price: Price::from_units(price),
            category,
            rating: 4.0,
            image: String::new(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ProductFilter::default();
        assert!(filter.matches(&product("Product 1", 10, Category::Food)));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let filter = ProductFilter {
            query: "pRoDuCt 1".to_owned(),
            ..ProductFilter::default()
        };
        assert!(filter.matches(&product("Product 12", 10, Category::Food)));
        assert!(!filter.matches(&product("Product 21", 10, Category::Food)));
    }

    #[test]
    fn test_category_must_equal_when_set() {
        let filter = ProductFilter {
            category: Some(Category::Books),
            ..ProductFilter::default()
        };
        assert!(filter.matches(&product("Product 1", 10, Category::Books)));
        assert!(!filter.matches(&product("Product 1", 10, Category::Games)));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = ProductFilter {
            min_price: Some(Price::from_units(10)),
            max_price: Some(Price::from_units(20)),
            ..ProductFilter::default()
        };
        assert!(filter.matches(&product("p", 10, Category::Food)));
        assert!(filter.matches(&product("p", 20, Category::Food)));
        assert!(!filter.matches(&product("p", 9, Category::Food)));
        assert!(!filter.matches(&product("p", 21, Category::Food)));
    }
}
