// Device-local persistence.
// Layering: `KeyValueStorage` backends → `PersistedValue` (one key, JSON) →
// `WriteQueue` (one writer per key). The store only talks to the last two.

pub mod file;
pub mod memory;
pub mod persisted;
pub mod write_queue;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use persisted::{PersistedValue, CURRENT_SECTION_KEY, RESUME_DATA_KEY};
pub use write_queue::WriteQueue;

/// The key-value capability the persistence layer needs from the platform.
///
/// Implement this to swap backends without touching the store.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, AppError>;

    /// Overwrites any previous value under `key`.
    async fn set(&self, key: &str, value: Bytes) -> Result<(), AppError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}
