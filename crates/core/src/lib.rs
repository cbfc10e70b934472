//! MegaShop Core - Shared types library.
//!
//! This crate provides common types used across all MegaShop components:
//! - `storefront` - The application shell, state modules, and page views
//! - `integration-tests` - Cross-module scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no logging. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   fixed domain enums (category, role, theme, locale, toast severity)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
