//! Display theme state.

use megashop_core::Theme;

use crate::storage::{self, SharedStore, keys};

/// The display theme, persisted across sessions.
///
/// Default: light.
#[derive(Clone)]
pub struct ThemeSession {
    store: SharedStore,
    value: Theme,
}

impl ThemeSession {
    /// Restore the theme from the store, defaulting to light.
    #[must_use]
    pub fn load(store: SharedStore) -> Self {
        let value = storage::restore_or_default(store.as_ref(), keys::THEME);
        Self { store, value }
    }

    /// The current theme.
    #[must_use]
    pub const fn current(&self) -> Theme {
        self.value
    }

    /// Flip between light and dark, persisting the new value.
    pub fn toggle(&mut self) -> Theme {
        self.value = self.value.toggled();
        storage::persist(self.store.as_ref(), keys::THEME, &self.value);
        tracing::debug!(theme = ?self.value, "theme toggled");
        self.value
    }
}
