//! Key-Value store backend trait.

use async_trait::async_trait;

use crate::CacheError;

/// A durable medium of named string slots.
///
/// `set` replaces the whole slot: readers see either the previous value or
/// the new one, never a partial write. No ordering guarantees are made
/// between two writers racing on the same key; callers serialize their
/// writes.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// Returns `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Delete the value stored under `key`. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key).await?.is_some())
    }
}
