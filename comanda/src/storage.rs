//! # Local Persisted Storage
//!
//! A tiny string key/value store backed by one JSON file (`storage.json`) in the
//! data directory. It holds the access token and the cached user; every mutation
//! is written through to disk.
//!
//! The handle is cheap to clone and shared between the UI thread, the API
//! client (which reads the token at send time) and background tasks.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::error::{AppError, Result};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";
pub const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Clone)]
pub struct LocalStore {
    path: Option<PathBuf>,
    items: Arc<RwLock<BTreeMap<String, String>>>,
}

impl LocalStore {
    /// Open (or create) the store in `dir`. A missing file opens empty.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .map_err(|e| AppError::Storage(format!("{}: {}", dir.display(), e)))?;

        let path = dir.join(STORAGE_FILE);
        let items = if path.exists() {
            let text = fs::read_to_string(&path)
                .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&text)
                    .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = items.len(), "Local store opened");

        Ok(Self {
            path: Some(path),
            items: Arc::new(RwLock::new(items)),
        })
    }

    /// Store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            items: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    pub fn set_item(&self, key: &str, value: impl Into<String>) -> Result<()> {
        let mut items = self.items.write();
        items.insert(key.to_string(), value.into());
        self.persist(&items)
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write();
        if items.remove(key).is_some() {
            self.persist(&items)?;
        }
        Ok(())
    }

    /// Drop every key.
    pub fn clear(&self) -> Result<()> {
        let mut items = self.items.write();
        items.clear();
        self.persist(&items)
    }

    // Called with the write lock held so file order matches memory order.
    fn persist(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let text = serde_json::to_string_pretty(items)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text)
            .and_then(|_| fs::rename(&tmp, path))
            .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");

        let store = LocalStore::open(dir.path()).expect("open");
        store.set_item(ACCESS_TOKEN_KEY, "tok-123").expect("set");
        store.set_item(USER_KEY, r#"{"nombre":"Ana"}"#).expect("set");

        let reopened = LocalStore::open(dir.path()).expect("reopen");
        assert_eq!(reopened.get_item(ACCESS_TOKEN_KEY).as_deref(), Some("tok-123"));
        assert_eq!(reopened.get_item(USER_KEY).as_deref(), Some(r#"{"nombre":"Ana"}"#));
    }

    #[test]
    fn test_clear_removes_every_key_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalStore::open(dir.path()).expect("open");
        store.set_item(ACCESS_TOKEN_KEY, "tok").expect("set");
        store.set_item(USER_KEY, "{}").expect("set");

        store.clear().expect("clear");

        let reopened = LocalStore::open(dir.path()).expect("reopen");
        assert_eq!(reopened.get_item(ACCESS_TOKEN_KEY), None);
        assert_eq!(reopened.get_item(USER_KEY), None);
    }

    #[test]
    fn test_clones_share_contents() {
        let store = LocalStore::in_memory();
        let handle = store.clone();

        handle.set_item(ACCESS_TOKEN_KEY, "shared").expect("set");
        assert_eq!(store.get_item(ACCESS_TOKEN_KEY).as_deref(), Some("shared"));

        store.remove_item(ACCESS_TOKEN_KEY).expect("remove");
        assert_eq!(handle.get_item(ACCESS_TOKEN_KEY), None);
        assert!(store.path().is_none());
    }

    #[test]
    fn test_corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(STORAGE_FILE), "{ not json").expect("write");

        let result = LocalStore::open(dir.path());
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
