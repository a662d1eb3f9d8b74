//! Session records.
//!
//! The admin session is a serialized object with an opaque token and an
//! issued-at time, validated for parseability and age on every check - a
//! presence-only flag is not enough to count as logged in. The customer
//! session is a plain serialized copy of the user record under its own key.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long an admin session stays valid after login.
pub const ADMIN_SESSION_TTL_SECONDS: i64 = 24 * 60 * 60;

/// An issued admin session, stored under the `adminToken` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    /// Opaque session token.
    pub token: Uuid,
    /// When the session was issued.
    pub issued_at: DateTime<Utc>,
}

impl AdminSession {
    /// Issue a fresh session starting now.
    #[must_use]
    pub fn issue() -> Self {
        Self {
            token: Uuid::new_v4(),
            issued_at: Utc::now(),
        }
    }

    /// Whether the session is still valid at `now`.
    ///
    /// Sessions from the future are rejected along with expired ones, so a
    /// tampered issued-at cannot extend the lifetime.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        let age = now - self.issued_at;
        age >= TimeDelta::zero() && age < TimeDelta::seconds(ADMIN_SESSION_TTL_SECONDS)
    }

    /// Whether the session is still valid right now.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}
