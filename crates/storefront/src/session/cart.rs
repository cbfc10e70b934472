//! Cart session state.

use megashop_core::{Price, ProductId};

use crate::cart::{CartCommand, CartLine, CartState};
use crate::catalog::Product;
use crate::storage::{self, SharedStore, keys};

/// The cart, persisted across sessions.
///
/// Wraps the pure [`CartState`] reducer: every dispatched command produces
/// the next state and writes it through to the store. Default: empty cart.
#[derive(Clone)]
pub struct CartSession {
    store: SharedStore,
    state: CartState,
}

impl CartSession {
    /// Restore the cart from the store, defaulting to empty.
    #[must_use]
    pub fn load(store: SharedStore) -> Self {
        let state = storage::restore_or_default(store.as_ref(), keys::CART);
        Self { store, state }
    }

    /// The current cart state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        self.state.items()
    }

    /// Total cart price.
    #[must_use]
    pub fn total(&self) -> Price {
        self.state.total()
    }

    /// Total unit count.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.state.count()
    }

    /// Dispatch a command through the reducer and persist the result.
    pub fn dispatch(&mut self, command: &CartCommand) {
        self.state = self.state.apply(command);
        storage::persist(self.store.as_ref(), keys::CART, &self.state);
        tracing::debug!(
            ?command,
            count = self.state.count(),
            total = %self.state.total(),
            "cart command applied"
        );
    }

    /// Add one unit of a catalog product.
    pub fn add(&mut self, product: &Product) {
        self.dispatch(&CartCommand::add_product(product));
    }

    /// Remove a line entirely.
    pub fn remove(&mut self, product_id: ProductId) {
        self.dispatch(&CartCommand::Remove(product_id));
    }

    /// Set a line's quantity (clamped to at least 1).
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        self.dispatch(&CartCommand::SetQuantity(product_id, quantity));
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.dispatch(&CartCommand::Clear);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use megashop_core::Category;

    use crate::storage::{MemoryStore, SessionStore};

    fn product(id: i32, units: u32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_units(units),
            category: Category::Phones,
            rating: 4.5,
            image: String::new(),
        }
    }

    #[test]
    fn test_defaults_to_empty() {
        let session = CartSession::load(Arc::new(MemoryStore::new()));
        assert!(session.state().is_empty());
        assert_eq!(session.total(), Price::ZERO);
    }

    #[test]
    fn test_mutations_survive_reload() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut session = CartSession::load(Arc::clone(&store));
        session.add(&product(1, 10));
        session.add(&product(1, 10));
        session.add(&product(2, 25));

        let restored = CartSession::load(store);
        assert_eq!(restored.items().len(), 2);
        assert_eq!(restored.count(), 3);
        assert_eq!(restored.total(), Price::from_units(45));
    }

    #[test]
    fn test_malformed_cart_falls_back_to_empty() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        store.set(keys::CART, "{\"items\": 3}");
        assert!(CartSession::load(store).state().is_empty());
    }

    #[test]
    fn test_clear_persists_empty_state() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut session = CartSession::load(Arc::clone(&store));
        session.add(&product(1, 10));
        session.clear();

        assert_eq!(store.get(keys::CART).unwrap(), "{\"items\":[]}");
    }
}
