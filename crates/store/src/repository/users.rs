//! Customer accounts and the customer session.
//!
//! The customer session is the weaker of the two session patterns: a full
//! serialized copy of the user record (password included) under the
//! `currentUser` key. That shape is part of the persisted-state contract.

use tracing::warn;

use topup_core::{UserId, Email};

use crate::error::{StoreError, ValidationError};
use crate::keys;
use crate::kv::KvStore;
use crate::models::{User, UserDraft, UserPatch};

use super::Repository;

impl<S: KvStore> Repository<S> {
    /// All registered users.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.read_collection(keys::USERS)
    }

    /// Look up a user by ID.
    #[must_use]
    pub fn get_user_by_id(&self, id: &UserId) -> Option<User> {
        self.users().into_iter().find(|u| &u.id == id)
    }

    /// Look up a user by email.
    #[must_use]
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users()
            .into_iter()
            .find(|u| u.email.as_str() == email)
    }

    /// Register a new user, stamping their ID.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmailTaken`] if the email is already
    /// registered, or a storage error if persisting the collection fails.
    pub fn register_user(&mut self, draft: UserDraft) -> Result<User, StoreError> {
        let mut users = self.users();
        if users.iter().any(|u| u.email == draft.email) {
            return Err(ValidationError::EmailTaken.into());
        }

        let user = User {
            id: UserId::generate(self.ids()),
            name: draft.name,
            email: draft.email,
            password: draft.password,
        };
        users.push(user.clone());
        self.write_collection(keys::USERS, &users)?;
        Ok(user)
    }

    /// Apply a patch to the user with the given ID.
    ///
    /// Returns the merged record, or `None` if the ID is absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn update_user(
        &mut self,
        id: &UserId,
        patch: UserPatch,
    ) -> Result<Option<User>, StoreError> {
        let mut users = self.users();
        let Some(user) = users.iter_mut().find(|u| &u.id == id) else {
            return Ok(None);
        };
        patch.apply(user);
        let updated = user.clone();
        self.write_collection(keys::USERS, &users)?;
        Ok(Some(updated))
    }

    /// Delete the user with the given ID.
    ///
    /// Returns whether a record was actually removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn delete_user(&mut self, id: &UserId) -> Result<bool, StoreError> {
        let mut users = self.users();
        let before = users.len();
        users.retain(|u| &u.id != id);
        if users.len() == before {
            return Ok(false);
        }
        self.write_collection(keys::USERS, &users)?;
        Ok(true)
    }

    /// Log a customer in by email and plaintext password match.
    ///
    /// On success the full user record is stored as the session copy and
    /// returned; on a mismatch nothing is written and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns a storage error if writing the session copy fails.
    pub fn login_user(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let Some(user) = self.get_user_by_email(email) else {
            return Ok(None);
        };
        if user.password != password {
            return Ok(None);
        }

        let raw = serde_json::to_string(&user)?;
        self.store_mut().set(keys::CURRENT_USER, &raw)?;
        Ok(Some(user))
    }

    /// The logged-in customer, if any.
    ///
    /// A corrupt session copy reads as logged out.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let raw = self.store().get(keys::CURRENT_USER)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(%err, "corrupt customer session treated as logged out");
                None
            }
        }
    }

    /// Log the customer out by removing the session copy.
    pub fn logout_user(&mut self) {
        self.store_mut().remove(keys::CURRENT_USER);
    }
}
