//! Cart page view-model.

use megashop_core::{Locale, ProductId};

use crate::cart::{CartLine, CartState};
use crate::i18n;

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// The product ID, for quantity/remove dispatch.
    pub product_id: ProductId,
    /// Product title.
    pub title: String,
    /// Formatted unit price ("$10.00").
    pub unit_price: String,
    /// Units in this line.
    pub quantity: u32,
    /// Localized unit label ("pcs").
    pub pcs_label: String,
    /// Formatted line total.
    pub line_total: String,
}

impl CartLineView {
    fn build(locale: Locale, line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            title: line.title.clone(),
            unit_price: line.unit_price.to_string(),
            quantity: line.quantity,
            pcs_label: i18n::translate(locale, "pcs"),
            line_total: line.line_total().to_string(),
        }
    }
}

/// The cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPageView {
    /// Localized page title.
    pub title: String,
    /// The line items, in insertion order (empty when the cart is empty).
    pub lines: Vec<CartLineView>,
    /// Localized total line ("Total: $30.00").
    pub total: String,
    /// Localized empty-cart message, present only when there are no lines.
    pub empty_message: Option<String>,
    /// Localized checkout action label.
    pub checkout_label: String,
}

impl CartPageView {
    /// Build the cart page from the current cart state.
    #[must_use]
    pub fn build(locale: Locale, cart: &CartState) -> Self {
        Self {
            title: i18n::translate(locale, "cart"),
            lines: cart
                .items()
                .iter()
                .map(|line| CartLineView::build(locale, line))
                .collect(),
            total: format!("{}: {}", i18n::translate(locale, "total"), cart.total()),
            empty_message: cart
                .is_empty()
                .then(|| i18n::translate(locale, "empty_cart")),
            checkout_label: i18n::translate(locale, "checkout"),
        }
    }
}
