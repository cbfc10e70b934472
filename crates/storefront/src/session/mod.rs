//! Session state modules.
//!
//! Each module is an independent state container with a fixed command set:
//! theme, locale, auth, cart, and toasts. The persisted modules write
//! through to the session store on every mutation and restore themselves at
//! construction, falling back to documented defaults when the stored value
//! is absent or malformed. Toasts are session-transient and never persisted.

pub mod auth;
pub mod cart;
pub mod locale;
pub mod theme;
pub mod toasts;

pub use auth::AuthSession;
pub use cart::CartSession;
pub use locale::LocaleSession;
pub use theme::ThemeSession;
pub use toasts::{ToastEntry, ToastStack};
