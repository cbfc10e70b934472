//! Account page view-model and login flow.

use megashop_core::{Locale, Role};

use crate::i18n;
use crate::models::User;
use crate::session::{AuthSession, ToastStack};

/// The logged-in account card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCard {
    /// Localized welcome line with the user's name substituted.
    pub welcome: String,
    /// The user's ID, for display.
    pub user_id: String,
    /// Role string.
    pub role: String,
}

/// The login form descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    /// Localized form title.
    pub title: String,
    /// Localized name field label.
    pub name_label: String,
    /// Localized submit action label.
    pub submit_label: String,
    /// Role choices offered by the form.
    pub roles: [Role; 2],
}

/// The account page: either the account card or the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountView {
    LoggedIn(AccountCard),
    LoggedOut(LoginForm),
}

impl AccountView {
    /// Build the account page from the current auth state.
    #[must_use]
    pub fn build(locale: Locale, user: Option<&User>) -> Self {
        match user {
            Some(user) => Self::LoggedIn(AccountCard {
                welcome: i18n::translate_with(locale, "welcome", &[("name", &user.name)]),
                user_id: user.id.to_string(),
                role: user.role.to_string(),
            }),
            None => Self::LoggedOut(LoginForm {
                title: i18n::translate(locale, "login"),
                name_label: i18n::translate(locale, "name"),
                submit_label: i18n::translate(locale, "login"),
                roles: [Role::User, Role::Admin],
            }),
        }
    }
}

/// Handle a login form submission.
///
/// An empty (or all-whitespace) name is rejected with an error toast; a
/// valid name logs the user in. Returns whether the login happened.
pub fn submit_login(
    auth: &mut AuthSession,
    toasts: &mut ToastStack,
    locale: Locale,
    name: &str,
    role: Role,
) -> bool {
    let name = name.trim();
    if name.is_empty() {
        toasts.push_error(locale, "fill_all_fields");
        return false;
    }

    auth.login(name, role);
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use megashop_core::ToastSeverity;

    use crate::storage::MemoryStore;

    #[test]
    fn test_logged_out_shows_form() {
        let AccountView::LoggedOut(form) = AccountView::build(Locale::En, None) else {
            panic!("expected login form");
        };
        assert_eq!(form.title, "Login");
        assert_eq!(form.roles, [Role::User, Role::Admin]);
    }

    #[test]
    fn test_logged_in_shows_welcome() {
        let user = User::new("Ada", Role::User);
        let AccountView::LoggedIn(card) = AccountView::build(Locale::En, Some(&user)) else {
            panic!("expected account card");
        };
        assert_eq!(card.welcome, "Welcome, Ada!");
        assert_eq!(card.role, "user");
    }

    #[test]
    fn test_submit_login_rejects_empty_name() {
        let mut auth = AuthSession::load(Arc::new(MemoryStore::new()));
        let mut toasts = ToastStack::new();

        assert!(!submit_login(&mut auth, &mut toasts, Locale::En, "   ", Role::User));
        assert!(auth.current().is_none());
        assert_eq!(toasts.entries()[0].severity, ToastSeverity::Error);
        assert_eq!(toasts.entries()[0].message, "Fill in all fields");
    }

    #[test]
    fn test_submit_login_trims_and_logs_in() {
        let mut auth = AuthSession::load(Arc::new(MemoryStore::new()));
        let mut toasts = ToastStack::new();

        assert!(submit_login(&mut auth, &mut toasts, Locale::En, " Ada ", Role::Admin));
        assert_eq!(auth.current().unwrap().name, "Ada");
        assert!(toasts.is_empty());
    }
}
