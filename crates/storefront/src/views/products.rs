//! Catalog page: filter state, pagination, and query sequencing.
//!
//! The browser owns the transient filter and page number, and mediates the
//! asynchronous catalog query. Because the filter can change again while a
//! query is still outstanding, results carry a monotonically increasing
//! request token and only the most recently issued token's result is ever
//! applied: a stale response cannot overwrite a newer one.

use megashop_core::Locale;

use crate::catalog::{CatalogClient, ProductFilter, ProductPage};
use crate::i18n;

use super::home::ProductCardView;

/// What the catalog page is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BrowseState {
    /// A query is outstanding (also the initial state before the first
    /// result arrives).
    #[default]
    Loading,
    /// The most recent result.
    Ready(ProductPage),
}

/// A handle for one issued query.
///
/// Produced by [`CatalogBrowser::begin_load`]; the snapshot of filter and
/// page it carries is what [`CatalogBrowser::run`] resolves, so a filter
/// change after issue does not affect queries already in flight.
#[derive(Debug, Clone)]
pub struct QueryTicket {
    token: u64,
    filter: ProductFilter,
    page: u32,
    page_size: u32,
}

/// The resolved result of one issued query.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    token: u64,
    page: ProductPage,
}

/// Catalog page state machine.
pub struct CatalogBrowser {
    client: CatalogClient,
    filter: ProductFilter,
    page: u32,
    page_size: u32,
    state: BrowseState,
    issued: u64,
    applied: u64,
}

impl CatalogBrowser {
    /// Create a browser over a catalog client.
    #[must_use]
    pub fn new(client: CatalogClient, page_size: u32) -> Self {
        Self {
            client,
            filter: ProductFilter::default(),
            page: 1,
            page_size,
            state: BrowseState::Loading,
            issued: 0,
            applied: 0,
        }
    }

    /// The current filter.
    #[must_use]
    pub const fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    /// Replace the filter and jump back to page 1.
    pub fn set_filter(&mut self, filter: ProductFilter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Reset the filter to match-everything and jump back to page 1.
    pub fn reset_filter(&mut self) {
        self.set_filter(ProductFilter::default());
    }

    /// The current 1-indexed page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Switch to another page (floored at 1).
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// What the page is currently showing.
    #[must_use]
    pub const fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Whether a query is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, BrowseState::Loading)
    }

    /// Issue a query for the current filter and page.
    ///
    /// Puts the page into the loading state and returns a ticket carrying a
    /// fresh request token; any ticket issued earlier is stale from this
    /// point on.
    pub fn begin_load(&mut self) -> QueryTicket {
        self.issued += 1;
        self.state = BrowseState::Loading;
        tracing::debug!(token = self.issued, page = self.page, "catalog query issued");
        QueryTicket {
            token: self.issued,
            filter: self.filter.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Resolve a ticket against the catalog.
    pub async fn run(&self, ticket: QueryTicket) -> QueryOutcome {
        let page = self
            .client
            .query(&ticket.filter, ticket.page, ticket.page_size)
            .await;
        QueryOutcome {
            token: ticket.token,
            page,
        }
    }

    /// Apply a resolved outcome; last request wins.
    ///
    /// Returns `true` if the outcome was applied. An outcome whose token is
    /// not the most recently issued one is dropped: either a newer query is
    /// still outstanding (the page stays loading until it resolves) or a
    /// newer result is already showing.
    pub fn apply(&mut self, outcome: QueryOutcome) -> bool {
        if outcome.token != self.issued || outcome.token <= self.applied {
            tracing::debug!(
                token = outcome.token,
                issued = self.issued,
                "dropping stale catalog query result"
            );
            return false;
        }
        self.applied = outcome.token;
        self.state = BrowseState::Ready(outcome.page);
        true
    }

    /// Issue, resolve, and apply a query in one step.
    ///
    /// Convenience for callers without interleaved filter changes; the
    /// begin/run/apply pieces stay public for drivers that overlap queries.
    pub async fn reload(&mut self) {
        let ticket = self.begin_load();
        let outcome = self.run(ticket).await;
        self.apply(outcome);
    }
}

/// The catalog page view-model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPageView {
    /// Localized filter panel labels.
    pub filters_label: String,
    /// Localized search placeholder.
    pub search_placeholder: String,
    /// Whether a query is outstanding (render a loading skeleton).
    pub loading: bool,
    /// Product cards for the current page (empty while loading).
    pub items: Vec<ProductCardView>,
    /// Localized match count ("Items: N"), empty while loading.
    pub items_count: String,
    /// Current 1-indexed page.
    pub page: u32,
    /// Total page count (1 while loading).
    pub page_count: u32,
}

impl CatalogPageView {
    /// Build the catalog page from the browser state.
    #[must_use]
    pub fn build(locale: Locale, browser: &CatalogBrowser) -> Self {
        let (loading, items, items_count, page_count) = match browser.state() {
            BrowseState::Loading => (true, Vec::new(), String::new(), 1),
            BrowseState::Ready(page) => (
                false,
                page.items
                    .iter()
                    .map(|p| ProductCardView::build(locale, p))
                    .collect(),
                i18n::translate_with(locale, "items_count", &[("n", &page.total.to_string())]),
                page.page_count,
            ),
        };

        Self {
            filters_label: i18n::translate(locale, "filters"),
            search_placeholder: i18n::translate(locale, "search"),
            loading,
            items,
            items_count,
            page: browser.page(),
            page_count,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::time::Duration;

    use megashop_core::Category;

    use crate::catalog::generator;

    fn browser() -> CatalogBrowser {
        let client = CatalogClient::new(generator::generate(84, 7), Duration::ZERO);
        CatalogBrowser::new(client, 24)
    }

    #[tokio::test]
    async fn test_reload_reaches_ready() {
        let mut browser = browser();
        assert!(browser.is_loading());

        browser.reload().await;
        let BrowseState::Ready(page) = browser.state() else {
            panic!("expected ready state");
        };
        assert_eq!(page.total, 84);
    }

    #[tokio::test]
    async fn test_stale_result_does_not_overwrite_newer() {
        let mut browser = browser();

        // First query issued, then the filter changes and a second query is
        // issued before the first resolves.
        let stale = browser.begin_load();
        browser.set_filter(ProductFilter {
            category: Some(Category::Books),
            ..ProductFilter::default()
        });
        let fresh = browser.begin_load();

        // The newer result arrives first and is applied.
        let fresh_outcome = browser.run(fresh).await;
        assert!(browser.apply(fresh_outcome));

        // The older result arrives late and must be dropped.
        let stale_outcome = browser.run(stale).await;
        assert!(!browser.apply(stale_outcome));

        let BrowseState::Ready(page) = browser.state() else {
            panic!("expected ready state");
        };
        assert!(page.total < 84, "stale unfiltered result overwrote the filtered one");
    }

    #[tokio::test]
    async fn test_result_for_superseded_token_keeps_loading() {
        let mut browser = browser();

        let old = browser.begin_load();
        let _newest = browser.begin_load();

        // The superseded query resolves first; the page must stay loading
        // until the newest one arrives.
        let old_outcome = browser.run(old).await;
        assert!(!browser.apply(old_outcome));
        assert!(browser.is_loading());
    }

    #[tokio::test]
    async fn test_filter_change_resets_page() {
        let mut browser = browser();
        browser.set_page(3);
        browser.set_filter(ProductFilter::default());
        assert_eq!(browser.page(), 1);
    }

    #[tokio::test]
    async fn test_page_view_while_loading_and_ready() {
        let mut browser = browser();
        let view = CatalogPageView::build(Locale::En, &browser);
        assert!(view.loading);
        assert!(view.items.is_empty());

        browser.reload().await;
        let view = CatalogPageView::build(Locale::En, &browser);
        assert!(!view.loading);
        assert_eq!(view.items.len(), 24);
        assert_eq!(view.items_count, "Items: 84");
        assert_eq!(view.page_count, 4);
    }
}
