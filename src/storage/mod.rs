//! Persistence boundary for cross-surface state (currently the theme).
//!
//! Two tiers mirror the host's storage surfaces: a durable key-value store
//! with change notifications, and a fast synchronous cache read before the
//! durable value resolves. Both are traits so the panel logic can run against
//! in-memory implementations in tests and the demo.

use serde_json::Value;

use crate::types::errors::StorageError;

pub mod file;
pub mod memory;

/// One change notification from the durable store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreChange {
    pub key: String,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

/// Durable key-value store with change notifications.
///
/// Reads and writes cross an asynchronous boundary on a real host; callers
/// treat a resolved read as the authoritative value and never block on it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Drains change notifications accumulated since the last call, in the
    /// order the writes happened.
    fn take_changes(&mut self) -> Vec<StoreChange>;
}

/// Fast synchronous same-profile cache. Used purely to avoid a flash of the
/// default theme before the durable value loads; failures are non-fatal.
pub trait LocalCache {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
