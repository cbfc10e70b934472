//! File-backed session store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::SessionStore;

/// Errors that can occur when opening a [`JsonFileStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The directory that should hold the store file could not be created.
    #[error("failed to create storage directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// A session store persisted to a single JSON file.
///
/// The whole key-value map is rewritten on every `set`. Writes are
/// fire-and-forget from the caller's perspective: an I/O failure is logged
/// at `warn` and the in-memory copy stays authoritative for the session.
/// A missing or malformed file at open time starts the store empty.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or create) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::CreateDir`] if the parent directory cannot be
    /// created. An unreadable or malformed store file is not an error: it is
    /// logged and treated as empty.
    pub fn open(path: PathBuf) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let entries = Self::load_entries(&path);
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened session store");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Read the stored map, degrading to empty on any problem.
    fn load_entries(path: &Path) -> HashMap<String, String> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return HashMap::new();
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read session store");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "session store file is malformed, starting empty"
                );
                HashMap::new()
            }
        }
    }

    /// Write the current map back to disk.
    fn flush(&self, entries: &HashMap<String, String>) {
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize session store");
                return;
            }
        };

        if let Err(error) = std::fs::write(&self.path, raw) {
            tracing::warn!(path = %self.path.display(), %error, "failed to write session store");
        }
    }
}

impl SessionStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        self.flush(&entries);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_store_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("megashop-tests")
            .join(format!("{name}-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_survives_reopen() {
        let path = temp_store_path("reopen");

        {
            let store = JsonFileStore::open(path.clone()).unwrap();
            store.set("theme", "\"dark\"");
        }

        let store = JsonFileStore::open(path.clone()).unwrap();
        assert_eq!(store.get("theme").unwrap(), "\"dark\"");

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let path = temp_store_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json {").unwrap();

        let store = JsonFileStore::open(path.clone()).unwrap();
        assert_eq!(store.get("theme"), None);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let path = temp_store_path("missing");
        let store = JsonFileStore::open(path).unwrap();
        assert_eq!(store.get("cart"), None);
    }
}
