//! File-backed key-value store.
//!
//! The whole keyspace lives in one JSON object on disk, rewritten on every
//! mutation. That matches the data layer's scale (a handful of keys, each a
//! small collection) and keeps the on-disk state inspectable with any JSON
//! tool.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{KvError, KvStore};

/// A JSON-file-backed store.
///
/// Values are held in memory and flushed to the backing file on each write,
/// so reads never touch the disk after open. A corrupt backing file is
/// logged and treated as empty; the next write replaces it.
#[derive(Debug)]
pub struct FileKv {
    path: PathBuf,
    map: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl FileKv {
    /// Open a store backed by `path`, creating the file on first write.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, KvError> {
        Self::open_with_quota(path, None)
    }

    /// Open a store that rejects values over `quota` bytes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn open_with_quota(
        path: impl Into<PathBuf>,
        quota: Option<usize>,
    ) -> Result<Self, KvError> {
        let path = path.into();
        let map = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!(path = %path.display(), %err, "corrupt store file treated as empty");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, map, quota })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), KvError> {
        let raw = serde_json::to_string_pretty(&self.map)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KvStore for FileKv {
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
        self.persist()
    }

    fn remove(&mut self, key: &str) -> bool {
        let removed = self.map.remove(key).is_some();
        if removed
            && let Err(err) = self.persist()
        {
            warn!(key, %err, "failed to persist removal");
        }
        removed
    }

    fn clear(&mut self) -> Result<(), KvError> {
        self.map.clear();
        self.persist()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut kv = FileKv::open(&path).unwrap();
            kv.set("products", "[]").unwrap();
        }

        let kv = FileKv::open(&path).unwrap();
        assert_eq!(kv.get("products").as_deref(), Some("[]"));
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path().join("absent.json")).unwrap();
        assert!(kv.get("products").is_none());
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let kv = FileKv::open(&path).unwrap();
        assert!(kv.get("products").is_none());
    }

    #[test]
    fn test_quota_applies() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv =
            FileKv::open_with_quota(dir.path().join("store.json"), Some(8)).unwrap();
        assert!(kv.set("k", "12345678").is_ok());
        assert!(matches!(
            kv.set("k", "123456789"),
            Err(KvError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn test_clear_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut kv = FileKv::open(&path).unwrap();
            kv.set("a", "1").unwrap();
            kv.clear().unwrap();
        }

        let kv = FileKv::open(&path).unwrap();
        assert!(kv.get("a").is_none());
    }
}
