//! JSON-file-backed durable store.
//!
//! Values live in a single flat JSON object persisted at the platform config
//! path (or an override for tests). Every write saves to disk immediately and
//! records a change notification.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::platform;
use crate::storage::{KeyValueStore, StoreChange};
use crate::types::errors::StorageError;

/// Durable store persisted as a JSON object on disk.
pub struct FileStore {
    path: String,
    values: Map<String, Value>,
    pending: Vec<StoreChange>,
}

impl FileStore {
    /// Creates a new FileStore.
    ///
    /// If `path_override` is `Some`, uses that path for the backing file.
    /// Otherwise, uses the platform-specific config directory with `store.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("store.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            path,
            values: Map::new(),
            pending: Vec::new(),
        }
    }

    /// Loads values from the backing file.
    ///
    /// A missing file yields an empty store; a malformed file is an error.
    pub fn load(&mut self) -> Result<(), StorageError> {
        let path = Path::new(&self.path);

        if !path.exists() {
            self.values = Map::new();
            return Ok(());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| StorageError::IoError(format!("Failed to read store file: {}", e)))?;

        let parsed: Value = serde_json::from_str(&content).map_err(|e| {
            StorageError::SerializationError(format!("Failed to parse store file: {}", e))
        })?;

        self.values = match parsed {
            Value::Object(map) => map,
            _ => {
                return Err(StorageError::SerializationError(
                    "Store file is not a JSON object".to_string(),
                ))
            }
        };
        Ok(())
    }

    /// Saves the current values to the backing file, creating parent
    /// directories if they don't exist.
    pub fn save(&self) -> Result<(), StorageError> {
        let path = Path::new(&self.path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::IoError(format!("Failed to create store directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&Value::Object(self.values.clone()))
            .map_err(|e| {
                StorageError::SerializationError(format!("Failed to serialize store: {}", e))
            })?;

        fs::write(path, json)
            .map_err(|e| StorageError::IoError(format!("Failed to write store file: {}", e)))?;

        Ok(())
    }

    /// Returns the path to the backing file.
    pub fn store_path(&self) -> &str {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        let old_value = self.values.insert(key.to_string(), value.clone());
        self.save()?;
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
