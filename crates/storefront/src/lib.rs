//! MegaShop Storefront library.
//!
//! This crate provides the demo storefront as a library: the shared-state
//! shell (theme, locale, auth, cart, toasts), the synthetic product catalog,
//! localization, and the presentation-agnostic page view-models. The binary
//! in `main.rs` is a thin walkthrough over the same API.
//!
//! # Architecture
//!
//! State modules are explicit containers wired together by [`shell::AppShell`];
//! nothing reaches shared state through globals. Each persisted module writes
//! through to a [`storage::SessionStore`] on every mutation and restores
//! itself (or falls back to a documented default) at construction. The view
//! layer only reads state and dispatches commands back into it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod session;
pub mod shell;
pub mod storage;
pub mod views;
