//! Catalog queries and request sequencing under realistic latency.

use std::time::Duration;

use megashop_core::{Category, Price, ProductId};
use megashop_storefront::catalog::{CatalogClient, ProductFilter, generator};
use megashop_storefront::views::{BrowseState, CatalogBrowser};

fn client_with_latency(latency_ms: u64) -> CatalogClient {
    CatalogClient::new(generator::generate(84, 7), Duration::from_millis(latency_ms))
}

#[tokio::test]
async fn test_filtered_pagination_sweep_has_no_gaps_or_duplicates() {
    let client = client_with_latency(0);
    let filter = ProductFilter {
        min_price: Some(Price::from_units(100)),
        max_price: Some(Price::from_units(900)),
        ..ProductFilter::default()
    };

    let first = client.query(&filter, 1, 10).await;
    let mut seen: Vec<ProductId> = Vec::new();
    for page in 1..=first.page_count {
        for product in client.query(&filter, page, 10).await.items {
            assert!(filter.matches(&product), "page contained non-matching item");
            assert!(!seen.contains(&product.id), "duplicate across pages");
            seen.push(product.id);
        }
    }
    assert_eq!(seen.len(), first.total);
}

#[tokio::test]
async fn test_combined_filter_criteria() {
    let client = client_with_latency(0);
    let filter = ProductFilter {
        query: "product 1".to_owned(),
        category: Some(Category::Phones),
        min_price: Some(Price::from_units(5)),
        max_price: Some(Price::from_units(1000)),
    };

    let result = client.query(&filter, 1, 50).await;
    for product in &result.items {
        assert!(product.title.to_lowercase().contains("product 1"));
        assert_eq!(product.category, Category::Phones);
    }
}

#[tokio::test]
async fn test_latency_is_observable_and_cached_queries_are_not_delayed() {
    let client = client_with_latency(30);
    let filter = ProductFilter::default();

    let start = std::time::Instant::now();
    client.query(&filter, 1, 24).await;
    assert!(start.elapsed() >= Duration::from_millis(30));

    // The identical query is served from cache, well under the latency.
    let start = std::time::Instant::now();
    client.query(&filter, 1, 24).await;
    assert!(start.elapsed() < Duration::from_millis(30));
}

#[tokio::test]
async fn test_last_request_wins_with_real_latency() {
    let client = client_with_latency(20);
    let mut browser = CatalogBrowser::new(client, 24);

    // Issue a broad query, then immediately narrow the filter and issue
    // another. Resolve both concurrently; regardless of arrival order, the
    // narrowed result must be the one showing.
    let stale = browser.begin_load();
    browser.set_filter(ProductFilter {
        category: Some(Category::Games),
        ..ProductFilter::default()
    });
    let fresh = browser.begin_load();

    let (stale_outcome, fresh_outcome) =
        tokio::join!(browser.run(stale), browser.run(fresh));

    assert!(browser.apply(fresh_outcome));
    assert!(!browser.apply(stale_outcome));

    let BrowseState::Ready(page) = browser.state() else {
        panic!("expected ready state");
    };
    assert_eq!(page.total, 12, "expected only the games category");
}

#[tokio::test]
async fn test_loading_state_until_newest_resolves() {
    let client = client_with_latency(0);
    let mut browser = CatalogBrowser::new(client, 24);

    let superseded = browser.begin_load();
    let newest = browser.begin_load();

    let outcome = browser.run(superseded).await;
    assert!(!browser.apply(outcome));
    assert!(browser.is_loading(), "superseded result must not end loading");

    let outcome = browser.run(newest).await;
    assert!(browser.apply(outcome));
    assert!(!browser.is_loading());
}
