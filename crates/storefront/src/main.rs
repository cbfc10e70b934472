//! MegaShop demo binary.
//!
//! Drives a short walkthrough over the shell API: restore state, browse the
//! catalog, add to the cart, log in, and render each page view. Output goes
//! through `tracing`; the rendering layer proper is out of scope for this
//! demo, the views are plain data.

#![cfg_attr(not(test), forbid(unsafe_code))]

use megashop_core::{ProductId, Role};
use megashop_storefront::config::ShopConfig;
use megashop_storefront::shell::AppShell;
use megashop_storefront::storage;
use megashop_storefront::views::{AccountView, Route};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "megashop=info,megashop_storefront=info".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = ShopConfig::from_env().expect("Failed to load configuration");
    let store = storage::open_store(&config).expect("Failed to open session store");

    let mut shell = AppShell::new(config, store);

    let header = shell.header();
    tracing::info!(title = %header.title, badge = %header.items_badge, "session restored");

    // Browse the catalog
    shell.navigate(Route::Products);
    shell.browser.reload().await;
    let products = shell.products_page();
    tracing::info!(
        items = products.items.len(),
        pages = products.page_count,
        "catalog loaded"
    );

    // Put something in the cart
    shell.add_to_cart(ProductId::new(1));
    shell.add_to_cart(ProductId::new(1));
    shell.add_to_cart(ProductId::new(2));
    let cart = shell.cart_page();
    tracing::info!(lines = cart.lines.len(), total = %cart.total, "cart updated");

    // Log in and visit the account page
    shell.navigate(Route::Account);
    shell.login("Ada", Role::Admin);
    if let AccountView::LoggedIn(card) = shell.account_page() {
        tracing::info!(welcome = %card.welcome, "logged in");
    }

    // Create a product draft on the admin page
    shell.navigate(Route::Admin);
    shell.submit_product("Mega Box", "199");
    for toast in shell.toasts_view().toasts {
        tracing::info!(severity = toast.severity, message = %toast.message, "toast");
    }

    // Flip the theme and show settings
    shell.theme.toggle();
    let settings = shell.settings_page();
    tracing::info!(theme = %settings.theme_value, locale = settings.locale_code, "settings");
}
