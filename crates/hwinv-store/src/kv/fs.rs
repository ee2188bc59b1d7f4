//! Filesystem-backed key-value store
//!
//! Each key maps to `<root>/<key>.json`. Writes replace the file atomically.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::atomic::atomic_write;
use super::KeyValueStore;
use crate::errors::{invalid_key, read_failed, write_failed, Result};

/// Filesystem key-value store rooted at a directory
#[derive(Debug, Clone)]
pub struct FsKv {
    root: PathBuf,
}

impl FsKv {
    /// Create a store at the given root directory
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the file backing `key`
    ///
    /// Keys are restricted to a safe character set so they can never escape
    /// the root directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(invalid_key(key));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FsKv {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(read_failed(key, format!("{}: {}", path.display(), e))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        atomic_write(&path, value.as_bytes())
            .await
            .map_err(|e| write_failed(key, format!("{}: {}", path.display(), e)))
    }
}
