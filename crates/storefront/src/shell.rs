//! Application shell.
//!
//! `AppShell` wires the state containers together by explicit construction:
//! every module is a field, view builders receive exactly the state they
//! read, and nothing is reachable through globals. The shell also owns the
//! current route - a plain state flag, as this demo has no URL routing.

use megashop_core::{ProductId, Role};

use crate::catalog::{CatalogClient, generator};
use crate::config::ShopConfig;
use crate::session::{AuthSession, CartSession, LocaleSession, ThemeSession, ToastStack};
use crate::storage::SharedStore;
use crate::views::{
    self, AccountView, AdminPanel, AdminView, CartPageView, CatalogBrowser, CatalogPageView,
    HeaderView, HomeView, Route, SettingsView, ToastsView,
};

/// The application shell: shared state plus the current route.
pub struct AppShell {
    config: ShopConfig,
    /// Display theme state.
    pub theme: ThemeSession,
    /// Display locale state.
    pub locale: LocaleSession,
    /// Authentication state.
    pub auth: AuthSession,
    /// Cart state.
    pub cart: CartSession,
    /// Toast notification stack.
    pub toasts: ToastStack,
    /// Catalog page state (filter, pagination, query sequencing).
    pub browser: CatalogBrowser,
    catalog: CatalogClient,
    admin: AdminPanel,
    route: Route,
}

impl AppShell {
    /// Build the shell: generate the catalog and restore persisted state.
    #[must_use]
    pub fn new(config: ShopConfig, store: SharedStore) -> Self {
        let products = generator::generate(config.catalog_size, config.catalog_seed);
        let catalog = CatalogClient::new(products, config.fetch_delay());
        let browser = CatalogBrowser::new(catalog.clone(), config.page_size);

        tracing::info!(
            catalog_size = config.catalog_size,
            page_size = config.page_size,
            "shell initialized"
        );

        Self {
            theme: ThemeSession::load(store.clone()),
            locale: LocaleSession::load(store.clone()),
            auth: AuthSession::load(store.clone()),
            cart: CartSession::load(store),
            toasts: ToastStack::new(),
            browser,
            catalog,
            admin: AdminPanel::new(),
            route: Route::default(),
            config,
        }
    }

    /// The current route.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Switch to another page.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(?route, "navigating");
        self.route = route;
    }

    /// The catalog client (shared with the browser).
    #[must_use]
    pub const fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// An unknown ID is a no-op, consistent with the cart's total-function
    /// command semantics. Returns whether the product was found.
    pub fn add_to_cart(&mut self, id: ProductId) -> bool {
        let Some(product) = self.catalog.find(id).cloned() else {
            tracing::debug!(%id, "add_to_cart ignored unknown product");
            return false;
        };
        self.cart.add(&product);
        true
    }

    /// Handle a login form submission (empty names are rejected with an
    /// error toast).
    pub fn login(&mut self, name: &str, role: Role) -> bool {
        views::account::submit_login(
            &mut self.auth,
            &mut self.toasts,
            self.locale.current(),
            name,
            role,
        )
    }

    /// Handle an admin product form submission.
    pub fn submit_product(&mut self, name: &str, price_input: &str) -> bool {
        self.admin.submit_product(
            &mut self.toasts,
            self.locale.current(),
            name,
            price_input,
        )
    }

    // =========================================================================
    // Page view builders
    // =========================================================================

    /// The header, reflecting the current route, cart, and user.
    #[must_use]
    pub fn header(&self) -> HeaderView {
        HeaderView::build(
            self.locale.current(),
            self.route,
            self.cart.count(),
            self.auth.current(),
        )
    }

    /// The home page.
    #[must_use]
    pub fn home_page(&self) -> HomeView {
        HomeView::build(
            self.locale.current(),
            self.catalog.products(),
            self.config.featured_count,
        )
    }

    /// The catalog page (loading state or current results).
    #[must_use]
    pub fn products_page(&self) -> CatalogPageView {
        CatalogPageView::build(self.locale.current(), &self.browser)
    }

    /// The cart page.
    #[must_use]
    pub fn cart_page(&self) -> CartPageView {
        CartPageView::build(self.locale.current(), self.cart.state())
    }

    /// The account page.
    #[must_use]
    pub fn account_page(&self) -> AccountView {
        AccountView::build(self.locale.current(), self.auth.current())
    }

    /// The admin page.
    #[must_use]
    pub fn admin_page(&self) -> AdminView {
        AdminView::build(self.locale.current(), &self.auth, &self.admin)
    }

    /// The settings page.
    #[must_use]
    pub fn settings_page(&self) -> SettingsView {
        SettingsView::build(self.locale.current(), self.theme.current())
    }

    /// The toast overlay.
    #[must_use]
    pub fn toasts_view(&self) -> ToastsView {
        ToastsView::build(&self.toasts)
    }
}
