//! In-process store for tests and hosts without durable storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::{CacheError, KvStore};

/// In-memory store backed by `Arc<RwLock<HashMap>>`.
///
/// Cloning shares the same underlying storage, so a test can keep a clone
/// and inspect exactly what the cart handed to `set`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot already written.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    /// Number of written slots.
    pub fn len(&self) -> usize {
        self.slots.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Whether no slot has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| CacheError::read(key, "lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| CacheError::write(key, "lock poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut slots = self.slots.write().map_err(|_| CacheError::Delete {
            key: key.to_string(),
            reason: "lock poisoned".to_string(),
        })?;
        slots.remove(key);
        Ok(())
    }
}
