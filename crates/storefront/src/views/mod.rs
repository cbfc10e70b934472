//! Page view-models.
//!
//! Each page is a plain-data view built from the current state; the structs
//! here carry already-localized labels and formatted values so a rendering
//! layer (terminal, templates, GUI) can display them without touching state
//! or the translation tables. View builders only read state; mutation goes
//! back through the session modules.

pub mod account;
pub mod admin;
pub mod cart;
pub mod header;
pub mod home;
pub mod products;
pub mod settings;
pub mod toasts;

pub use account::AccountView;
pub use admin::{AdminPanel, AdminView};
pub use cart::CartPageView;
pub use header::HeaderView;
pub use home::{HomeView, ProductCardView};
pub use products::{BrowseState, CatalogBrowser, CatalogPageView};
pub use settings::SettingsView;
pub use toasts::ToastsView;

/// The current page, a plain state flag (no URL routing in this demo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Products,
    Cart,
    Account,
    Admin,
    Settings,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Products,
        Self::Cart,
        Self::Account,
        Self::Admin,
        Self::Settings,
    ];

    /// The translation key for this route's navigation label.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Products => "products",
            Self::Cart => "cart",
            Self::Account => "account",
            Self::Admin => "admin",
            Self::Settings => "settings",
        }
    }
}
