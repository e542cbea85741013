//! Behavior shared by every storage backend.

use std::sync::Arc;

use formsmith_storage::{FileStorage, KeyValueStore, MemoryStorage};
use pretty_assertions::assert_eq;

fn exercise(storage: &dyn KeyValueStore) {
    assert_eq!(storage.get("form-builder-templates").unwrap(), None);

    storage.set("form-builder-templates", "[]").unwrap();
    assert_eq!(
        storage.get("form-builder-templates").unwrap().as_deref(),
        Some("[]")
    );

    storage
        .set("form-builder-templates", r#"[{"name":"Survey"}]"#)
        .unwrap();
    assert_eq!(
        storage.get("form-builder-templates").unwrap().as_deref(),
        Some(r#"[{"name":"Survey"}]"#)
    );

    storage.remove("form-builder-templates").unwrap();
    storage.remove("form-builder-templates").unwrap();
    assert_eq!(storage.get("form-builder-templates").unwrap(), None);
}

#[test]
fn memory_backend() {
    exercise(&MemoryStorage::new());
}

#[test]
fn file_backend() {
    let dir = tempfile::tempdir().unwrap();
    exercise(&FileStorage::open(dir.path()).unwrap());
}

#[test]
fn file_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    FileStorage::open(dir.path())
        .unwrap()
        .set("form-builder-submissions", "[1,2]")
        .unwrap();

    let reopened = FileStorage::open(dir.path()).unwrap();
    assert_eq!(
        reopened.get("form-builder-submissions").unwrap().as_deref(),
        Some("[1,2]")
    );
}

#[test]
fn open_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let storage = FileStorage::open(&nested).unwrap();
    assert_eq!(storage.dir(), nested.as_path());
    assert!(nested.is_dir());
}

#[test]
fn shared_through_arc() {
    let storage = Arc::new(MemoryStorage::new());
    let other = Arc::clone(&storage);
    storage.set("k", "v").unwrap();
    assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
}
