//! Scoped key-value persistence.
//!
//! The auth layer never touches the filesystem directly; it writes its
//! single session entry through the [`KeyValueStore`] capability so that
//! tests can swap in [`MemoryStore`] and deployments can choose where the
//! entry lives.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid key: {0:?}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Scoped key-value storage.
///
/// `remove` is idempotent: removing an absent key succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed store keeping one UTF-8 file per key under a base directory.
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `base_path`, creating the directory
    /// if it does not exist yet.
    pub async fn new<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }

        Ok(Self { base_path })
    }

    /// Keys double as file names, so they are restricted to a path-safe
    /// alphabet.
    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let safe = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

        if !safe {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.base_path.join(key))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;

        let mut file = fs::File::create(&path).await?;
        file.write_all(value.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store, the test double for anything that takes a
/// [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).await.unwrap();

        assert_eq!(store.get("currentUser").await.unwrap(), None);

        store.set("currentUser", r#"{"id":"student-1"}"#).await.unwrap();
        assert_eq!(
            store.get("currentUser").await.unwrap().as_deref(),
            Some(r#"{"id":"student-1"}"#)
        );

        store.set("currentUser", "replaced").await.unwrap();
        assert_eq!(store.get("currentUser").await.unwrap().as_deref(), Some("replaced"));
    }

    #[tokio::test]
    async fn test_file_store_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).await.unwrap();

        store.set("currentUser", "value").await.unwrap();
        store.remove("currentUser").await.unwrap();
        assert_eq!(store.get("currentUser").await.unwrap(), None);

        // A second remove of the same key is not an error.
        store.remove("currentUser").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_rejects_unsafe_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).await.unwrap();

        for key in ["", "../escape", "a/b", "a\\b"] {
            assert!(matches!(
                store.set(key, "value").await,
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new();

        assert_eq!(store.get("currentUser").await.unwrap(), None);

        store.set("currentUser", "value").await.unwrap();
        assert_eq!(store.get("currentUser").await.unwrap().as_deref(), Some("value"));

        store.remove("currentUser").await.unwrap();
        assert_eq!(store.get("currentUser").await.unwrap(), None);
        store.remove("currentUser").await.unwrap();
    }
}
