//! Admin credentials and the admin session.

use tracing::{debug, warn};

use crate::error::{StoreError, ValidationError};
use crate::keys;
use crate::kv::KvStore;
use crate::models::AdminCredentials;
use crate::session::AdminSession;

use super::Repository;

impl<S: KvStore> Repository<S> {
    /// The configured admin credentials, or the defaults
    /// (`admin`/`admin`) if never configured.
    #[must_use]
    pub fn admin_credentials(&self) -> AdminCredentials {
        let defaults = AdminCredentials::default();
        AdminCredentials {
            username: self
                .store()
                .get(keys::ADMIN_USERNAME)
                .unwrap_or(defaults.username),
            password: self
                .store()
                .get(keys::ADMIN_PASSWORD)
                .unwrap_or(defaults.password),
        }
    }

    /// Replace the admin credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingAdminCredentials`] when either
    /// field is empty, or a storage error if the write fails.
    pub fn update_admin_credentials(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<(), StoreError> {
        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingAdminCredentials.into());
        }
        self.store_mut().set(keys::ADMIN_USERNAME, username)?;
        self.store_mut().set(keys::ADMIN_PASSWORD, password)?;
        Ok(())
    }

    /// Attempt an admin login.
    ///
    /// On a credential match a fresh session (opaque token plus issued-at)
    /// is written under the session key and `true` is returned; on a
    /// mismatch nothing is written.
    ///
    /// # Errors
    ///
    /// Returns a storage error if writing the session fails.
    pub fn admin_login(&mut self, username: &str, password: &str) -> Result<bool, StoreError> {
        let stored = self.admin_credentials();
        if username != stored.username || password != stored.password {
            debug!("admin login rejected");
            return Ok(false);
        }

        let session = AdminSession::issue();
        let raw = serde_json::to_string(&session)?;
        self.store_mut().set(keys::ADMIN_TOKEN, &raw)?;
        Ok(true)
    }

    /// Whether a valid, unexpired admin session is present.
    ///
    /// An unparseable session value reads as logged out; key presence
    /// alone is not authentication.
    #[must_use]
    pub fn check_admin_auth(&self) -> bool {
        let Some(raw) = self.store().get(keys::ADMIN_TOKEN) else {
            return false;
        };
        match serde_json::from_str::<AdminSession>(&raw) {
            Ok(session) => session.is_valid(),
            Err(err) => {
                warn!(%err, "unparseable admin session treated as logged out");
                false
            }
        }
    }

    /// Log the admin out by removing the session.
    pub fn admin_logout(&mut self) {
        self.store_mut().remove(keys::ADMIN_TOKEN);
    }
}
