use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use classifier::error::StorageError;
use classifier::{
    ClassifierService, ErrorKind, MemoryRecordStore, Record, RecordStore, ServiceOptions,
    StorageId,
};

use crate::integration::support::snapshot;

/// Memory store whose path updates start failing after `budget` successes.
struct FlakyStore {
    inner: MemoryRecordStore,
    budget: AtomicUsize,
}

impl FlakyStore {
    fn new(budget: usize) -> Self {
        Self {
            inner: MemoryRecordStore::new(),
            budget: AtomicUsize::new(budget),
        }
    }

    fn spend(&self) -> Result<(), StorageError> {
        self.budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |b| b.checked_sub(1))
            .map(|_| ())
            .map_err(|_| StorageError::Unavailable("connection lost".to_string()))
    }
}

impl RecordStore for FlakyStore {
    fn exists_exact(&self, name: &str, path: &str) -> Result<bool, StorageError> {
        self.inner.exists_exact(name, path)
    }
    fn insert(&self, record: &Record) -> Result<StorageId, StorageError> {
        self.inner.insert(record)
    }
    fn insert_if_absent(&self, record: &Record) -> Result<Option<StorageId>, StorageError> {
        self.inner.insert_if_absent(record)
    }
    fn find_all(&self) -> Result<Vec<Record>, StorageError> {
        self.inner.find_all()
    }
    fn find_by_name_and_parent_path(
        &self,
        name: &str,
        parent_path: &str,
    ) -> Result<Vec<Record>, StorageError> {
        self.inner.find_by_name_and_parent_path(name, parent_path)
    }
    fn find_by_path_prefix(&self, prefix: &str) -> Result<Vec<Record>, StorageError> {
        self.inner.find_by_path_prefix(prefix)
    }
    fn update_path_of_exact_match(
        &self,
        name: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<(), StorageError> {
        self.spend()?;
        self.inner.update_path_of_exact_match(name, old_path, new_path)
    }
    fn rename_exact_match(
        &self,
        name: &str,
        path: &str,
        new_name: &str,
    ) -> Result<(), StorageError> {
        self.inner.rename_exact_match(name, path, new_name)
    }
    fn delete_by_path_prefix(&self, prefix: &str) -> Result<usize, StorageError> {
        self.inner.delete_by_path_prefix(prefix)
    }
    fn delete_exact(&self, name: &str, path: &str) -> Result<(), StorageError> {
        self.inner.delete_exact(name, path)
    }
}

#[test]
fn interrupted_rename_keeps_partial_moves() {
    let store = Arc::new(FlakyStore::new(1));
    let svc = ClassifierService::new(store.clone(), ServiceOptions::default()).unwrap();
    svc.add("Docs", "/").unwrap();
    svc.add("A", "/Docs").unwrap();
    svc.add("B", "/Docs").unwrap();

    let err = svc.rename("Docs", "/", "Papers").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StorageUnavailable);

    // One child moved, the other did not, and the node kept its old name.
    let records = snapshot(svc.store());
    assert!(records.contains(&("A".to_string(), "/root/Papers/".to_string())));
    assert!(records.contains(&("B".to_string(), "/root/Docs/".to_string())));
    assert!(records.contains(&("Docs".to_string(), "/root/".to_string())));
}

#[test]
fn unavailable_store_fails_every_operation() {
    let store = Arc::new(MemoryRecordStore::new());
    let svc = ClassifierService::new(store.clone(), ServiceOptions::default()).unwrap();
    svc.add("Docs", "/").unwrap();

    store.set_available(false);
    assert_eq!(svc.read("/").unwrap_err().kind(), ErrorKind::StorageUnavailable);
    assert_eq!(
        svc.add("New", "/").unwrap_err().kind(),
        ErrorKind::StorageUnavailable
    );
    assert_eq!(
        svc.remove("Docs", "/").unwrap_err().kind(),
        ErrorKind::StorageUnavailable
    );
    assert_eq!(
        svc.rename("Docs", "/", "Papers").unwrap_err().kind(),
        ErrorKind::StorageUnavailable
    );

    store.set_available(true);
    assert_eq!(svc.read("/").unwrap().node_count(), 2);
}

#[test]
fn validation_precedes_storage_access() {
    let store = Arc::new(MemoryRecordStore::new());
    let svc = ClassifierService::new(store.clone(), ServiceOptions::default()).unwrap();

    store.set_available(false);
    assert_eq!(svc.add("Bad!", "/").unwrap_err().kind(), ErrorKind::InvalidName);
    assert_eq!(
        svc.remove("", "/").unwrap_err().kind(),
        ErrorKind::InvalidName
    );
}

#[test]
fn bootstrap_fails_on_unavailable_store() {
    let store = Arc::new(MemoryRecordStore::new());
    store.set_available(false);
    let err = ClassifierService::new(store, ServiceOptions::default())
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
}
