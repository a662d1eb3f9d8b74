//! In-memory key-value store.

use std::collections::HashMap;

use super::{KvError, KvStore};

/// A `HashMap`-backed store, primarily for tests and ephemeral sessions.
///
/// An optional per-key byte quota makes quota-exceeded paths reproducible
/// without filling a real storage medium.
#[derive(Debug, Default)]
pub struct MemoryKv {
    map: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryKv {
    /// Create an unbounded in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects values over `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            map: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        if let Some(quota) = self.quota
            && value.len() > quota
        {
            return Err(KvError::QuotaExceeded {
                key: key.to_owned(),
                size: value.len(),
                quota,
            });
        }
        self.map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> bool {
        self.map.remove(key).is_some()
    }

    fn clear(&mut self) -> Result<(), KvError> {
        self.map.clear();
        Ok(())
    }
}
