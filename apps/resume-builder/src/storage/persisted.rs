use std::marker::PhantomData;
use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::storage::KeyValueStorage;

/// Key holding the serialized resume document.
pub const RESUME_DATA_KEY: &str = "resumeData";
/// Key holding the last open editor section. Optional: its absence or
/// corruption never blocks the document load.
pub const CURRENT_SECTION_KEY: &str = "currentSection";

/// A single JSON value stored under one fixed key.
pub struct PersistedValue<T> {
    storage: Arc<dyn KeyValueStorage>,
    key: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T: Serialize> PersistedValue<T> {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: &'static str) -> Self {
        Self {
            storage,
            key,
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Raw stored bytes. A read failure is logged and reported as "nothing
    /// stored": callers fall back exactly as they would on first run.
    pub async fn load(&self) -> Option<Bytes> {
        match self.storage.get(self.key).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to read '{}' from storage: {e}", self.key);
                None
            }
        }
    }

    pub async fn save(&self, value: &T) -> Result<(), AppError> {
        let encoded = serde_json::to_vec(value)?;
        self.storage.set(self.key, Bytes::from(encoded)).await
    }

    pub async fn remove(&self) -> Result<(), AppError> {
        self.storage.remove(self.key).await
    }
}
