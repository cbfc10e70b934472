//! Admin page view-model and product form flow.

use megashop_core::{Locale, Price, ToastSeverity};
use rust_decimal::Decimal;

use crate::i18n;
use crate::session::{AuthSession, ToastStack};

/// A product draft captured from the admin form.
///
/// Drafts live for the session only; they are listed on the admin page and
/// never inserted into the immutable catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminDraft {
    /// Draft product name.
    pub name: String,
    /// Draft price.
    pub price: Price,
}

/// Admin page state: the drafts created this session.
#[derive(Debug, Default)]
pub struct AdminPanel {
    drafts: Vec<AdminDraft>,
}

impl AdminPanel {
    /// Create an empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The drafts created this session, oldest first.
    #[must_use]
    pub fn drafts(&self) -> &[AdminDraft] {
        &self.drafts
    }

    /// Handle a product form submission.
    ///
    /// An empty name, an unparseable price, or a price of zero or less is
    /// rejected with a localized error toast. A valid submission appends a
    /// draft and pushes a success toast. Returns whether the draft was
    /// created.
    pub fn submit_product(
        &mut self,
        toasts: &mut ToastStack,
        locale: Locale,
        name: &str,
        price_input: &str,
    ) -> bool {
        let name = name.trim();
        let Some(price) = parse_price(price_input) else {
            toasts.push_error(locale, "fill_all_fields");
            return false;
        };
        if name.is_empty() {
            toasts.push_error(locale, "fill_all_fields");
            return false;
        }

        let draft = AdminDraft {
            name: name.to_owned(),
            price,
        };
        toasts.push(
            ToastSeverity::Success,
            i18n::translate_with(
                locale,
                "product_created",
                &[("name", name), ("price", &price.to_string())],
            ),
        );
        tracing::debug!(name = %draft.name, price = %draft.price, "product draft created");
        self.drafts.push(draft);
        true
    }
}

/// Parse a positive price from form input.
fn parse_price(input: &str) -> Option<Price> {
    let amount: Decimal = input.trim().parse().ok()?;
    if amount <= Decimal::ZERO {
        return None;
    }
    Price::new(amount).ok()
}

/// Draft display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftCardView {
    /// Draft name.
    pub name: String,
    /// Formatted price.
    pub price: String,
}

/// The admin panel page content, for admins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPanelView {
    /// Localized "you are admin" intro line.
    pub intro: String,
    /// Localized form section title.
    pub form_title: String,
    /// Localized name field label.
    pub name_label: String,
    /// Localized price field label.
    pub price_label: String,
    /// Localized create action label.
    pub create_label: String,
    /// The session's drafts, oldest first.
    pub drafts: Vec<DraftCardView>,
}

/// The admin page: the panel for admins, a denial message for everyone else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminView {
    /// Current user lacks the admin role (or nobody is logged in).
    Denied {
        /// Localized denial message.
        message: String,
    },
    Panel(AdminPanelView),
}

impl AdminView {
    /// Build the admin page from the current auth state and panel.
    #[must_use]
    pub fn build(locale: Locale, auth: &AuthSession, panel: &AdminPanel) -> Self {
        if !auth.is_admin() {
            return Self::Denied {
                message: i18n::translate(locale, "only_admin"),
            };
        }

        Self::Panel(AdminPanelView {
            intro: i18n::translate(locale, "you_are_admin"),
            form_title: i18n::translate(locale, "add_product"),
            name_label: i18n::translate(locale, "name"),
            price_label: i18n::translate(locale, "price"),
            create_label: i18n::translate(locale, "create"),
            drafts: panel
                .drafts()
                .iter()
                .map(|d| DraftCardView {
                    name: d.name.clone(),
                    price: d.price.to_string(),
                })
                .collect(),
        })
    }
}
