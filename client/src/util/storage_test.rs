use super::*;

use serde::Deserialize;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Prefs {
    theme: String,
    compact: bool,
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    assert_eq!(store.get("missing"), Ok(None));
}

#[test]
fn memory_storage_set_then_get() {
    let store = MemoryStorage::new();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k"), Ok(Some("v".to_owned())));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_remove_missing_key_is_ok() {
    let store = MemoryStorage::new();
    assert_eq!(store.remove("nope"), Ok(()));
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let observer = store.clone();
    store.set("k", "v").unwrap();
    assert_eq!(observer.get("k"), Ok(Some("v".to_owned())));
    observer.remove("k").unwrap();
    assert_eq!(store.get("k"), Ok(None));
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn save_json_writes_compact_json() {
    let store = MemoryStorage::new();
    let prefs = Prefs { theme: "dark".to_owned(), compact: true };
    save_json(&store, "prefs", &prefs).unwrap();
    assert_eq!(
        store.get("prefs").unwrap().as_deref(),
        Some(r#"{"theme":"dark","compact":true}"#)
    );
}

#[test]
fn load_json_reads_back_saved_value() {
    let store = MemoryStorage::new();
    let prefs = Prefs { theme: "light".to_owned(), compact: false };
    save_json(&store, "prefs", &prefs).unwrap();
    assert_eq!(load_json::<Prefs>(&store, "prefs"), Ok(Some(prefs)));
}

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStorage::new();
    assert_eq!(load_json::<Prefs>(&store, "prefs"), Ok(None));
}

#[test]
fn load_json_reports_corrupt_content() {
    let store = MemoryStorage::new();
    store.set("prefs", "{not json").unwrap();
    assert!(matches!(load_json::<Prefs>(&store, "prefs"), Err(StorageError::Corrupt(_))));
}

#[test]
fn load_json_reports_schema_mismatch_as_corrupt() {
    let store = MemoryStorage::new();
    store.set("prefs", r#"{"theme":42}"#).unwrap();
    assert!(matches!(load_json::<Prefs>(&store, "prefs"), Err(StorageError::Corrupt(_))));
}

// =============================================================
// BrowserStorage (host build)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_off_browser() {
    let store = BrowserStorage;
    assert_eq!(store.get("k"), Err(StorageError::Unavailable));
    assert_eq!(store.set("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(store.remove("k"), Err(StorageError::Unavailable));
}
