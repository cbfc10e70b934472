//! Catalog query client.

use std::sync::Arc;
use std::time::Duration;

use megashop_core::{Category, Price, ProductId};
use moka::future::Cache;

use super::{Product, ProductFilter, ProductPage};

/// Cached query results, keyed by the full query shape.
const CACHE_CAPACITY: u64 = 256;

/// Cache key for catalog query pages.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CacheKey {
    query: String,
    category: Option<Category>,
    min_price: Option<Price>,
    max_price: Option<Price>,
    page: u32,
    page_size: u32,
}

impl CacheKey {
    fn new(filter: &ProductFilter, page: u32, page_size: u32) -> Self {
        Self {
            query: filter.query.to_lowercase(),
            category: filter.category,
            min_price: filter.min_price,
            max_price: filter.max_price,
            page,
            page_size,
        }
    }
}

/// Client for the in-memory product catalog.
///
/// Emulates a remote product API: queries are asynchronous and a configurable
/// artificial latency is applied on cache misses. The catalog itself is
/// immutable, which makes every query idempotent and safely cacheable.
///
/// Cloning is cheap; clones share the catalog and the cache.
#[derive(Clone)]
pub struct CatalogClient {
    products: Arc<Vec<Product>>,
    cache: Cache<CacheKey, ProductPage>,
    latency: Duration,
}

impl CatalogClient {
    /// Create a client over a fixed product list.
    ///
    /// `latency` is applied once per uncached query; pass `Duration::ZERO`
    /// to disable the emulated network delay (the default in tests).
    #[must_use]
    pub fn new(products: Vec<Product>, latency: Duration) -> Self {
        Self {
            products: Arc::new(products),
            cache: Cache::new(CACHE_CAPACITY),
            latency,
        }
    }

    /// The full, unfiltered catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a single product by ID.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Run a filtered, paginated catalog query.
    ///
    /// Pages are 1-indexed; a page past the last one yields an empty `items`
    /// slice, not an error. `page_count` is at least 1 even when nothing
    /// matches. Repeated calls with the same arguments return identical
    /// results.
    pub async fn query(&self, filter: &ProductFilter, page: u32, page_size: u32) -> ProductPage {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let key = CacheKey::new(filter, page, page_size);

        self.cache
            .get_with(key, self.run_query(filter.clone(), page, page_size))
            .await
    }

    /// The uncached query path: emulated latency plus filter and slice.
    async fn run_query(&self, filter: ProductFilter, page: u32, page_size: u32) -> ProductPage {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .collect();
        let total = matches.len();
        let page_count = total
            .div_ceil(page_size as usize)
            .max(1)
            .try_into()
            .unwrap_or(u32::MAX);

        let start = (page as usize - 1).saturating_mul(page_size as usize);
        let items = matches
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect();

        tracing::debug!(total, page, page_count, "catalog query resolved");

        ProductPage {
            items,
            total,
            page_count,
        }
    }
}
