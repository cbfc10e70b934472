//! Display locale state.

use megashop_core::Locale;

use crate::storage::{self, SharedStore, keys};

/// The display locale, persisted across sessions.
///
/// Default: ru.
#[derive(Clone)]
pub struct LocaleSession {
    store: SharedStore,
    value: Locale,
}

impl LocaleSession {
    /// Restore the locale from the store, defaulting to ru.
    #[must_use]
    pub fn load(store: SharedStore) -> Self {
        let value = storage::restore_or_default(store.as_ref(), keys::LOCALE);
        Self { store, value }
    }

    /// The current locale.
    #[must_use]
    pub const fn current(&self) -> Locale {
        self.value
    }

    /// Replace the locale, persisting the new value.
    pub fn set(&mut self, locale: Locale) {
        self.value = locale;
        storage::persist(self.store.as_ref(), keys::LOCALE, &self.value);
        tracing::debug!(locale = %self.value, "locale changed");
    }
}
