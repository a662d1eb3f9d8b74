//! Customer account types.

use serde::{Deserialize, Serialize};

use topup_core::{Email, UserId};

/// A registered customer.
///
/// The password is stored in plaintext - an explicit non-goal of this
/// design, carried through because the persisted layout (including the
/// `currentUser` session copy) embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (`user-<millis>` token).
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across the collection.
    pub email: Email,
    /// Plaintext password.
    pub password: String,
}

/// Caller-supplied fields for registering a user.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub name: String,
    pub email: Email,
    pub password: String,
}

/// Field-by-field update for a user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub password: Option<String>,
}

impl UserPatch {
    pub(crate) fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
    }
}
