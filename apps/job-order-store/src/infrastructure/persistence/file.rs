//! File-backed key-value store.
//!
//! One file per key under a client-scoped directory. Writes land in a
//! sibling temporary file first and are renamed into place, so a reader
//! sees either the old blob or the new one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::KeyValueStore;
use crate::domain::job_order::StoreError;

/// Directory-backed implementation of `KeyValueStore`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the key files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", file_stem(key)))
    }
}

/// Map a key onto a safe file stem.
///
/// ASCII letters, digits, `_` and `-` pass through. Every other byte becomes
/// `%XX`, so distinct keys never share a file.
fn file_stem(key: &str) -> String {
    use std::fmt::Write;

    key.bytes().fold(String::with_capacity(key.len()), |mut stem, b| {
        if b.is_ascii_alphanumeric() || b == b'_' || b == b'-' {
            stem.push(char::from(b));
        } else {
            let _ = write!(stem, "%{b:02X}");
        }
        stem
    })
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Storage(format!(
                "failed to read '{}': {e}",
                path.display()
            ))),
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            StoreError::Storage(format!(
                "failed to create '{}': {e}",
                self.root.display()
            ))
        })?;

        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");

        tokio::fs::write(&staging, value).await.map_err(|e| {
            StoreError::Storage(format!("failed to write '{}': {e}", staging.display()))
        })?;
        tokio::fs::rename(&staging, &path).await.map_err(|e| {
            StoreError::Storage(format!("failed to replace '{}': {e}", path.display()))
        })?;

        Ok(())
    }
}
