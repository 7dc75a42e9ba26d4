use super::*;

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set("token", "abc");
    assert_eq!(store.get("token").as_deref(), Some("abc"));
}

#[test]
fn memory_store_overwrites() {
    let store = MemoryStore::new();
    store.set("token", "a");
    store.set("token", "b");
    assert_eq!(store.get("token").as_deref(), Some("b"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_missing_is_noop() {
    let store = MemoryStore::new();
    store.remove("token");
    assert!(store.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_off_browser() {
    let store = LocalStorage;
    store.set("token", "abc");
    assert_eq!(store.get("token"), None);
}
