//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional, with the defaults below:
//! - `MEGASHOP_CATALOG_SIZE` - number of generated products (default: 84)
//! - `MEGASHOP_CATALOG_SEED` - RNG seed for catalog generation (default: 7)
//! - `MEGASHOP_PAGE_SIZE` - catalog page size (default: 24)
//! - `MEGASHOP_FETCH_DELAY_MS` - artificial catalog query latency (default: 500)
//! - `MEGASHOP_FEATURED_COUNT` - home page featured strip length (default: 12)
//! - `MEGASHOP_STORAGE_PATH` - session store file; state stays in memory when unset

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_CATALOG_SIZE: u32 = 84;
const DEFAULT_CATALOG_SEED: u64 = 7;
const DEFAULT_PAGE_SIZE: u32 = 24;
const DEFAULT_FETCH_DELAY_MS: u64 = 500;
const DEFAULT_FEATURED_COUNT: usize = 12;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Number of products to generate at startup.
    pub catalog_size: u32,
    /// Seed for deterministic catalog generation.
    pub catalog_seed: u64,
    /// Catalog page size.
    pub page_size: u32,
    /// Artificial latency applied to uncached catalog queries.
    pub fetch_delay_ms: u64,
    /// Number of products on the home page featured strip.
    pub featured_count: usize,
    /// Session store file; `None` keeps state in memory.
    pub storage_path: Option<PathBuf>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            catalog_size: DEFAULT_CATALOG_SIZE,
            catalog_seed: DEFAULT_CATALOG_SEED,
            page_size: DEFAULT_PAGE_SIZE,
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
            featured_count: DEFAULT_FEATURED_COUNT,
            storage_path: None,
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Unset
    /// variables use the documented defaults; set-but-invalid values are
    /// errors rather than silent fallbacks.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            catalog_size: parse_env("MEGASHOP_CATALOG_SIZE", DEFAULT_CATALOG_SIZE)?,
            catalog_seed: parse_env("MEGASHOP_CATALOG_SEED", DEFAULT_CATALOG_SEED)?,
            page_size: parse_env("MEGASHOP_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            fetch_delay_ms: parse_env("MEGASHOP_FETCH_DELAY_MS", DEFAULT_FETCH_DELAY_MS)?,
            featured_count: parse_env("MEGASHOP_FEATURED_COUNT", DEFAULT_FEATURED_COUNT)?,
            storage_path: get_optional_env("MEGASHOP_STORAGE_PATH").map(PathBuf::from),
        })
    }

    /// A configuration suited to tests: default sizes, no latency, no file.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            fetch_delay_ms: 0,
            ..Self::default()
        }
    }

    /// The artificial query latency as a `Duration`.
    #[must_use]
    pub const fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.catalog_size, 84);
        assert_eq!(config.catalog_seed, 7);
        assert_eq!(config.page_size, 24);
        assert_eq!(config.fetch_delay_ms, 500);
        assert_eq!(config.featured_count, 12);
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn test_fetch_delay_duration() {
        let config = ShopConfig::default();
        assert_eq!(config.fetch_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_for_tests_disables_latency() {
        let config = ShopConfig::for_tests();
        assert_eq!(config.fetch_delay(), Duration::ZERO);
        assert_eq!(config.catalog_size, 84);
    }

    #[test]
    fn test_parse_env_unset_uses_default() {
        let value: u32 = parse_env("MEGASHOP_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }
}
