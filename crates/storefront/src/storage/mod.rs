//! Session-scoped key-value storage.
//!
//! State modules persist through the [`SessionStore`] trait: a flat string
//! key-value medium with `get`/`set` and nothing else. Two implementations
//! are provided - [`memory::MemoryStore`] for process-local state and tests,
//! and [`file::JsonFileStore`] which survives process restarts.
//!
//! Values are JSON. A malformed stored value is treated exactly like an
//! absent one: the module falls back to its documented default and the
//! incident is logged at `warn`, never surfaced to the user.

pub mod file;
pub mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ShopConfig;
use crate::error::Result;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Storage keys, one per persisted state module.
pub mod keys {
    /// Key for the display theme.
    pub const THEME: &str = "theme";

    /// Key for the display locale.
    pub const LOCALE: &str = "locale";

    /// Key for the current logged-in user (or `null`).
    pub const USER: &str = "user";

    /// Key for the cart state.
    pub const CART: &str = "cart";
}

/// A session-scoped string key-value store.
///
/// Implementations are expected to be cheap for the volumes involved (a
/// handful of keys, values of at most a few kilobytes) and to never fail
/// from the caller's perspective: write problems are logged and swallowed.
pub trait SessionStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// Shared handle to a session store.
pub type SharedStore = Arc<dyn SessionStore>;

/// Open the store selected by the configuration.
///
/// A configured storage path selects the file-backed store; otherwise state
/// lives in memory for the lifetime of the process.
///
/// # Errors
///
/// Returns an error if the file store's directory cannot be created.
pub fn open_store(config: &ShopConfig) -> Result<SharedStore> {
    Ok(match &config.storage_path {
        Some(path) => Arc::new(JsonFileStore::open(path.clone())?),
        None => Arc::new(MemoryStore::new()),
    })
}

/// Restore a module's value from the store, falling back to its default.
///
/// Absent keys restore silently; present-but-malformed values log a `warn`
/// and restore the default. This must never fail: corrupt storage degrades
/// to defaults instead of breaking startup.
pub(crate) fn restore_or_default<T: DeserializeOwned + Default>(
    store: &dyn SessionStore,
    key: &str,
) -> T {
    let Some(raw) = store.get(key) else {
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%key, %error, "discarding malformed persisted value");
            T::default()
        }
    }
}

/// Serialize a module's value and write it through to the store.
///
/// Serialization of the state types cannot realistically fail; if it ever
/// does, the write is skipped and logged rather than propagated.
pub(crate) fn persist<T: Serialize>(store: &dyn SessionStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(error) => {
            tracing::warn!(%key, %error, "failed to serialize state for persistence");
        }
    }
}
