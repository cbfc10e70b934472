//! Authentication state.
//!
//! Demo semantics: `login` replaces the current user unconditionally, with
//! no credential or uniqueness check. At most one user is active per
//! session.

use megashop_core::Role;

use crate::models::User;
use crate::storage::{self, SharedStore, keys};

/// The current user, persisted across sessions.
///
/// Default: nobody logged in.
#[derive(Clone)]
pub struct AuthSession {
    store: SharedStore,
    current: Option<User>,
}

impl AuthSession {
    /// Restore the current user from the store, defaulting to none.
    #[must_use]
    pub fn load(store: SharedStore) -> Self {
        let current = storage::restore_or_default(store.as_ref(), keys::USER);
        Self { store, current }
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Whether the current user holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.role.is_admin())
    }

    /// Log a user in, replacing any current user.
    pub fn login(&mut self, name: impl Into<String>, role: Role) -> &User {
        let user = User::new(name, role);
        tracing::debug!(user_id = %user.id, role = %user.role, "user logged in");
        let user = &*self.current.insert(user);
        storage::persist(self.store.as_ref(), keys::USER, &Some(user.clone()));
        user
    }

    /// Clear the current user.
    pub fn logout(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!("user logged out");
        }
        storage::persist(self.store.as_ref(), keys::USER, &self.current);
    }
}
