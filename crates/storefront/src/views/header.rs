//! Header view-model: navigation, cart badge, user badge.

use megashop_core::Locale;

use crate::i18n;
use crate::models::User;

use super::Route;

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// The route this entry leads to.
    pub route: Route,
    /// Localized label.
    pub label: String,
    /// Whether this is the current page.
    pub active: bool,
}

/// The logged-in user badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadge {
    /// Display name.
    pub name: String,
    /// Role string ("user" / "admin").
    pub role: String,
    /// Localized logout action label.
    pub logout_label: String,
}

/// The page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Localized application title.
    pub title: String,
    /// Navigation entries, in order.
    pub nav: Vec<NavItem>,
    /// Localized cart badge ("Items: N").
    pub items_badge: String,
    /// Current locale code shown in the language selector.
    pub locale_code: &'static str,
    /// The user badge, or `None` with a login call-to-action instead.
    pub user: Option<UserBadge>,
    /// Localized login action label.
    pub login_label: String,
}

impl HeaderView {
    /// Build the header from the current shell state.
    #[must_use]
    pub fn build(locale: Locale, current: Route, cart_count: u32, user: Option<&User>) -> Self {
        let nav = Route::ALL
            .into_iter()
            .map(|route| NavItem {
                route,
                label: i18n::translate(locale, route.label_key()),
                active: route == current,
            })
            .collect();

        Self {
            title: i18n::translate(locale, "app_title"),
            nav,
            items_badge: i18n::translate_with(
                locale,
                "items_count",
                &[("n", &cart_count.to_string())],
            ),
            locale_code: locale.as_str(),
            user: user.map(|u| UserBadge {
                name: u.name.clone(),
                role: u.role.to_string(),
                logout_label: i18n::translate(locale, "logout"),
            }),
            login_label: i18n::translate(locale, "login"),
        }
    }
}
