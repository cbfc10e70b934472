//! Cart state machine.
//!
//! The cart is a reducer: [`CartState::apply`] is a pure transition function
//! from a state and a [`CartCommand`] to the next state. Derived values
//! (total, count) are recomputed from the line set on demand and never
//! stored, so they cannot drift.
//!
//! Every command is a total function: unknown product IDs are no-ops and
//! out-of-range quantities are clamped, never errors.

use megashop_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// One line item in the cart.
///
/// `unit_price` is a snapshot captured when the product was added; it does
/// not track later catalog price changes. At most one line exists per
/// product ID, and quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Product title at add time.
    pub title: String,
    /// Price per unit at add time.
    pub unit_price: Price,
    /// Number of units, >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }
}

/// A command against the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Add one unit of a product; an existing line increments instead of
    /// duplicating.
    Add {
        /// The product to add.
        product_id: ProductId,
        /// Title snapshot.
        title: String,
        /// Price snapshot.
        unit_price: Price,
    },
    /// Remove a line entirely; no-op for an unknown ID.
    Remove(ProductId),
    /// Set a line's quantity, clamped to at least 1; no-op for an unknown ID.
    SetQuantity(ProductId, u32),
    /// Empty the cart.
    Clear,
}

impl CartCommand {
    /// Build an `Add` command from a catalog product, snapshotting its
    /// current title and price.
    #[must_use]
    pub fn add_product(product: &Product) -> Self {
        Self::Add {
            product_id: product.id,
            title: product.title.clone(),
            unit_price: product.price,
        }
    }
}

/// The cart: an ordered sequence of line items (insertion order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartLine>,
}

impl CartState {
    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total cart price, recomputed from the current lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLine::line_total).sum()
    }

    /// Total unit count, recomputed from the current lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Apply a command, producing the next cart state.
    #[must_use]
    pub fn apply(&self, command: &CartCommand) -> Self {
        match command {
            CartCommand::Add {
                product_id,
                title,
                unit_price,
            } => {
                let mut items = self.items.clone();
                if let Some(line) = items.iter_mut().find(|l| l.product_id == *product_id) {
                    line.quantity += 1;
                } else {
                    items.push(CartLine {
                        product_id: *product_id,
                        title: title.clone(),
                        unit_price: *unit_price,
                        quantity: 1,
                    });
                }
                Self { items }
            }
            CartCommand::Remove(product_id) => Self {
                items: self
                    .items
                    .iter()
                    .filter(|l| l.product_id != *product_id)
                    .cloned()
                    .collect(),
            },
            CartCommand::SetQuantity(product_id, quantity) => {
                let mut items = self.items.clone();
                if let Some(line) = items.iter_mut().find(|l| l.product_id == *product_id) {
                    line.quantity = (*quantity).max(1);
                }
                Self { items }
            }
            CartCommand::Clear => Self::default(),
        }
    }
}
