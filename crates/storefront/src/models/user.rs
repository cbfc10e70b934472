//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use megashop_core::{Role, UserId};

/// The current logged-in user.
///
/// Demo semantics: a user exists only for the session that logged it in.
/// There is no account database; a fresh ID is allocated per login and the
/// value is discarded on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique ID for this login.
    pub id: UserId,
    /// Display name entered at login.
    pub name: String,
    /// Granted role.
    pub role: Role,
    /// When this login happened.
    pub logged_in_at: DateTime<Utc>,
}

impl User {
    /// Create a user for a fresh login.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: UserId::new_random(),
            name: name.into(),
            role,
            logged_in_at: Utc::now(),
        }
    }
}
