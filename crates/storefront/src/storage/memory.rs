//! In-memory session store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::SessionStore;

/// A process-local session store.
///
/// State written here lives only for the lifetime of the process; this is
/// the default store and the one used throughout the test suites.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("theme", "\"light\"");
        store.set("theme", "\"dark\"");
        assert_eq!(store.get("theme").unwrap(), "\"dark\"");
    }
}
