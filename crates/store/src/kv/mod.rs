//! Key-value backend abstraction.
//!
//! The repository never talks to a storage medium directly; it goes through
//! the [`KvStore`] trait so tests can substitute an in-memory store and the
//! CLI can use a file on disk. Backends hold string values under string
//! keys and may enforce a fixed per-key byte quota, reporting
//! [`KvError::QuotaExceeded`] when a value would not fit.

mod file;
mod memory;

pub use file::FileKv;
pub use memory::MemoryKv;

use thiserror::Error;

/// Errors reported by a [`KvStore`] backend.
#[derive(Debug, Error)]
pub enum KvError {
    /// A value exceeded the backend's per-key byte quota.
    #[error("value for key {key} is {size} bytes, over the {quota}-byte quota")]
    QuotaExceeded {
        /// Key the write was addressed to.
        key: String,
        /// Size of the rejected value in bytes.
        size: usize,
        /// Configured per-key quota in bytes.
        quota: usize,
    },

    /// Underlying I/O failure (file-backed stores only).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be serialized.
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A synchronous string key-value store with a fixed per-key capacity.
///
/// All operations run to completion on the calling thread. The store is
/// process-local; concurrent writers are out of scope by construction.
pub trait KvStore {
    /// Read the value under `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::QuotaExceeded`] if the value is over the per-key
    /// quota, or an I/O error from file-backed stores.
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;

    /// Remove the value under `key`. Returns whether a value was present.
    fn remove(&mut self, key: &str) -> bool;

    /// Erase every key in the store.
    ///
    /// # Errors
    ///
    /// Returns an I/O error from file-backed stores.
    fn clear(&mut self) -> Result<(), KvError>;
}
