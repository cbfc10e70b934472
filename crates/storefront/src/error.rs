//! Unified error handling.
//!
//! By design almost nothing here can fail at runtime: state commands are
//! total functions, storage reads degrade to defaults, and translation
//! lookups fall back to the raw key. The fallible surface is startup -
//! configuration loading and opening the file-backed store - and that is
//! what `AppError` covers.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::file::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The session store could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
