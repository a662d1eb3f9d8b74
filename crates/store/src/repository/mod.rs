//! The Local Store Repository.
//!
//! One facade over an injected [`KvStore`] backend, split into per-entity
//! modules:
//!
//! - [`products`] - product CRUD with the capacity degradation policy
//! - [`categories`] - category CRUD (no cascade to products)
//! - [`orders`] - order CRUD plus the guarded status transition
//! - [`users`] - customer accounts and the customer session
//! - [`contact`] - contact form submissions
//! - [`site_config`] - the site config singleton and its image side keys
//! - [`auth`] - admin credentials and the admin session
//!
//! All operations are synchronous and run to completion on the calling
//! thread; there is no transaction boundary across entity writes.

pub mod auth;
pub mod categories;
pub mod contact;
pub mod orders;
pub mod products;
pub mod site_config;
pub mod users;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use topup_core::IdGenerator;

use crate::error::StoreError;
use crate::keys;
use crate::kv::KvStore;
use crate::policy::CapacityPolicy;
use crate::seed;

/// Collection-style CRUD over a key-value backend.
///
/// Opening seeds absent collections with their defaults and never touches
/// existing data. The backend is owned for the repository's lifetime;
/// substitute [`MemoryKv`](crate::kv::MemoryKv) in tests and
/// [`FileKv`](crate::kv::FileKv) everywhere the data should survive the
/// process.
#[derive(Debug)]
pub struct Repository<S: KvStore> {
    store: S,
    policy: CapacityPolicy,
    ids: IdGenerator,
}

impl<S: KvStore> Repository<S> {
    /// Open a repository with the default capacity policy.
    ///
    /// # Errors
    ///
    /// Returns a storage error if seeding the default data fails.
    pub fn open(store: S) -> Result<Self, StoreError> {
        Self::with_policy(store, CapacityPolicy::default())
    }

    /// Open a repository with a custom capacity policy.
    ///
    /// # Errors
    ///
    /// Returns a storage error if seeding the default data fails.
    pub fn with_policy(mut store: S, policy: CapacityPolicy) -> Result<Self, StoreError> {
        seed::initialize(&mut store)?;
        Ok(Self {
            store,
            policy,
            ids: IdGenerator::new(),
        })
    }

    /// The active capacity policy.
    #[must_use]
    pub const fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// Consume the repository and hand back the backend.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Erase every key and restore the default seed data.
    ///
    /// With `preserve_admin_session` the current admin session value (if
    /// any) survives the wipe, so an admin can reset the store without
    /// being logged out.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the wipe or the re-seed fails.
    pub fn clear_all(&mut self, preserve_admin_session: bool) -> Result<(), StoreError> {
        let saved = preserve_admin_session
            .then(|| self.store.get(keys::ADMIN_TOKEN))
            .flatten();

        self.store.clear()?;

        if let Some(session) = saved {
            self.store.set(keys::ADMIN_TOKEN, &session)?;
        }

        seed::initialize(&mut self.store)
    }

    /// Deserialize the collection under `key`.
    ///
    /// Absent and corrupt values both read as the empty collection; a parse
    /// failure is logged and never propagated.
    pub(crate) fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.store.get(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!(key, %err, "corrupt collection treated as empty");
                Vec::new()
            }
        }
    }

    /// Serialize and persist the whole collection under `key`.
    pub(crate) fn write_collection<T: Serialize>(
        &mut self,
        key: &str,
        items: &[T],
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(key, &raw)?;
        Ok(())
    }

    pub(crate) const fn store(&self) -> &S {
        &self.store
    }

    pub(crate) const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub(crate) const fn ids(&self) -> &IdGenerator {
        &self.ids
    }
}
