//! In-memory blob store - values live in a mutex-guarded map for the life of the
//! process.

use crate::{
    errors::{Error, Result},
    persistence::BlobStore,
};
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

/// Blob store held in process memory. Useful for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `value` under `key`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: Mutex::new(values),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.values.lock().map_err(|_| Error::Storage {
            message: "In-memory blob store lock poisoned".to_string(),
        })
    }
}

impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
