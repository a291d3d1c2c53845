//! Filesystem-backed key-value storage: one `<key>.json` file per key in a
//! data directory.
//!
//! Writes go to a temp file in the same directory and are renamed over the
//! target, so a crash mid-write leaves the previous value intact. The
//! rename is blocking I/O and runs inside `tokio::task::spawn_blocking`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use async_trait::async_trait;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::AppError;
use crate::storage::KeyValueStorage;

#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::Storage(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid storage key '{key}'"),
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, AppError> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(contents) => Ok(Some(Bytes::from(contents))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: Bytes) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        let root = self.root.clone();

        tokio::task::spawn_blocking(move || write_atomically(&root, &path, &value))
            .await
            .map_err(|e| AppError::Internal(anyhow!("storage write task failed: {e}")))??;

        debug!("Wrote storage key '{key}'");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn write_atomically(root: &Path, path: &Path, contents: &[u8]) -> Result<(), AppError> {
    std::fs::create_dir_all(root)?;
    let mut tmp = NamedTempFile::new_in(root)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| AppError::Storage(e.error))?;
    Ok(())
}
