//! Storage Abstraction
//!
//! A unified interface for local key-value persistence backends.
//! Values are strings; callers decide what they encode.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Key not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value store trait - unified interface for persistence backends
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store a value under a key, overwriting any prior value
    async fn put(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Retrieve the value for a key
    async fn get(&self, key: &str) -> StorageResult<String>;

    /// Delete the value for a key; absent keys are a no-op
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Get store name for logging
    fn name(&self) -> &str;
}

/// Local filesystem store, one file per key
pub struct LocalStore {
    /// Root directory for stored values
    root: PathBuf,
}

impl LocalStore {
    /// Create a new local store
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create a store under a temp directory
    pub fn temp() -> std::io::Result<Self> {
        let dir = std::env::temp_dir().join("operator-dashboard-state");
        std::fs::create_dir_all(&dir)?;
        Ok(Self::new(dir))
    }

    /// Resolve a key to a full path
    fn resolve_path(&self, key: &str) -> StorageResult<PathBuf> {
        // Prevent directory traversal
        if key.is_empty() || key.contains("..") || key.starts_with('/') || key.starts_with('\\') {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(key))
    }

    /// Ensure parent directory exists
    async fn ensure_parent(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for LocalStore {
    async fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.resolve_path(key)?;
        self.ensure_parent(&path).await?;

        let mut file = fs::File::create(&path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;

        debug!(path = ?path, size = value.len(), "Value stored");
        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<String> {
        let path = self.resolve_path(key)?;

        if !path.exists() {
            return Err(StorageError::NotFound(key.to_string()));
        }

        Ok(fs::read_to_string(&path).await?)
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.resolve_path(key)?;

        if path.exists() {
            fs::remove_file(&path).await?;
            debug!(path = ?path, "Value deleted");
        }

        Ok(())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.resolve_path(key)?;
        Ok(path.exists())
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// In-memory store for testing
pub struct MemoryStore {
    values: tokio::sync::RwLock<std::collections::HashMap<String, String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: tokio::sync::RwLock::new(std::collections::HashMap::new()),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<String> {
        let values = self.values.read().await;
        values
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let mut values = self.values.write().await;
        values.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let values = self.values.read().await;
        Ok(values.contains_key(key))
    }

    fn name(&self) -> &str {
        "memory"
    }
}
