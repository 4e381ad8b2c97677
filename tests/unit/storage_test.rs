use tempfile::TempDir;

use sidetabs::storage::file::FileStore;
use sidetabs::storage::memory::{DeniedCache, MemoryCache, MemoryStore};
use sidetabs::storage::{KeyValueStore, LocalCache};
use sidetabs::types::errors::StorageError;

#[test]
fn test_memory_store_get_set() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("theme").unwrap(), None);
    store.set("theme", serde_json::json!("dark")).unwrap();
    assert_eq!(store.get("theme").unwrap(), Some(serde_json::json!("dark")));
}

#[test]
fn test_memory_store_change_ordering() {
    let mut store = MemoryStore::new();
    store.set("theme", serde_json::json!("dark")).unwrap();
    store.set("theme", serde_json::json!("light")).unwrap();

    let changes = store.take_changes();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].old_value, None);
    assert_eq!(changes[0].new_value, Some(serde_json::json!("dark")));
    assert_eq!(changes[1].old_value, Some(serde_json::json!("dark")));
    assert_eq!(changes[1].new_value, Some(serde_json::json!("light")));
    assert!(store.take_changes().is_empty());
}

#[test]
fn test_memory_cache_roundtrip() {
    let mut cache = MemoryCache::new();
    assert_eq!(cache.get("vt_theme").unwrap(), None);
    cache.set("vt_theme", "dark").unwrap();
    assert_eq!(cache.get("vt_theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_denied_cache_errors_on_both_paths() {
    let mut cache = DeniedCache;
    assert!(matches!(
        cache.get("vt_theme"),
        Err(StorageError::AccessDenied(_))
    ));
    assert!(matches!(
        cache.set("vt_theme", "dark"),
        Err(StorageError::AccessDenied(_))
    ));
}

#[test]
fn test_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json").to_string_lossy().to_string();

    let mut store = FileStore::new(Some(path.clone()));
    store.load().unwrap();
    store.set("theme", serde_json::json!("catppuccin")).unwrap();

    let mut reloaded = FileStore::new(Some(path));
    reloaded.load().unwrap();
    assert_eq!(
        reloaded.get("theme").unwrap(),
        Some(serde_json::json!("catppuccin"))
    );
}

#[test]
fn test_file_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json").to_string_lossy().to_string();
    let mut store = FileStore::new(Some(path));
    store.load().unwrap();
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn test_file_store_rejects_malformed_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{not json").unwrap();

    let mut store = FileStore::new(Some(path.to_string_lossy().to_string()));
    assert!(matches!(
        store.load(),
        Err(StorageError::SerializationError(_))
    ));
}

#[test]
fn test_file_store_rejects_non_object_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let mut store = FileStore::new(Some(path.to_string_lossy().to_string()));
    assert!(store.load().is_err());
}

#[test]
fn test_file_store_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir
        .path()
        .join("nested")
        .join("deeper")
        .join("store.json")
        .to_string_lossy()
        .to_string();

    let mut store = FileStore::new(Some(path));
    store.load().unwrap();
    store.set("theme", serde_json::json!("dark")).unwrap();
    assert_eq!(store.get("theme").unwrap(), Some(serde_json::json!("dark")));
}
