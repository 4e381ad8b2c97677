//! In-memory storage implementations for tests and the demo binary.

use std::collections::HashMap;

use serde_json::Value;

use crate::storage::{KeyValueStore, LocalCache, StoreChange};
use crate::types::errors::StorageError;

/// In-memory durable store. Records a change notification per write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
    pending: Vec<StoreChange>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        let old_value = self.values.insert(key.to_string(), value.clone());
        self.pending.push(StoreChange {
            key: key.to_string(),
            old_value,
            new_value: Some(value),
        });
        Ok(())
    }

    fn take_changes(&mut self) -> Vec<StoreChange> {
        std::mem::take(&mut self.pending)
    }
}

/// In-memory synchronous cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    values: HashMap<String, String>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Cache that denies every access, as a sandboxed context would.
#[derive(Debug, Default)]
pub struct DeniedCache;

impl LocalCache for DeniedCache {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::AccessDenied("cache read denied".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::AccessDenied("cache write denied".to_string()))
    }
}
