//! In-process record store.
//!
//! Keeps records in a `BTreeMap` keyed by `(path, name)`, so iteration order
//! is path order. Availability can be switched off to simulate a store that
//! cannot be reached.

use crate::error::StorageError;
use crate::store::{RecordStore, StoredRecord};
use crate::types::{Record, StorageId};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

type Key = (String, String);

fn key(name: &str, path: &str) -> Key {
    (path.to_string(), name.to_string())
}

#[derive(Default)]
struct Inner {
    records: BTreeMap<Key, StoredRecord>,
    next_id: u64,
}

pub struct MemoryRecordStore {
    inner: RwLock<Inner>,
    available: AtomicBool,
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Make every subsequent call succeed (`true`) or fail with
    /// `StorageError::Unavailable` (`false`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable(
                "in-memory store switched off".to_string(),
            ))
        }
    }

    fn put(inner: &mut Inner, record: &Record) -> StorageId {
        inner.next_id += 1;
        let id = inner.next_id;
        inner.records.insert(
            key(&record.name, &record.path),
            StoredRecord {
                id,
                name: record.name.clone(),
                path: record.path.clone(),
            },
        );
        StorageId(id)
    }

    fn relocate(&self, from: Key, to: Key) -> Result<(), StorageError> {
        self.check()?;
        let mut inner = self.inner.write();
        if let Some(mut stored) = inner.records.remove(&from) {
            stored.path = to.0.clone();
            stored.name = to.1.clone();
            inner.records.insert(to, stored);
        }
        Ok(())
    }
}

impl RecordStore for MemoryRecordStore {
    fn exists_exact(&self, name: &str, path: &str) -> Result<bool, StorageError> {
        self.check()?;
        Ok(self.inner.read().records.contains_key(&key(name, path)))
    }

    fn insert(&self, record: &Record) -> Result<StorageId, StorageError> {
        self.check()?;
        Ok(Self::put(&mut self.inner.write(), record))
    }

    fn insert_if_absent(&self, record: &Record) -> Result<Option<StorageId>, StorageError> {
        self.check()?;
        let mut inner = self.inner.write();
        if inner.records.contains_key(&key(&record.name, &record.path)) {
            return Ok(None);
        }
        Ok(Some(Self::put(&mut inner, record)))
    }

    fn find_all(&self) -> Result<Vec<Record>, StorageError> {
        self.check()?;
        Ok(self
            .inner
            .read()
            .records
            .values()
            .map(StoredRecord::record)
            .collect())
    }

    fn find_by_name_and_parent_path(
        &self,
        name: &str,
        parent_path: &str,
    ) -> Result<Vec<Record>, StorageError> {
        self.check()?;
        Ok(self
            .inner
            .read()
            .records
            .get(&key(name, parent_path))
            .map(StoredRecord::record)
            .into_iter()
            .collect())
    }

    fn find_by_path_prefix(&self, prefix: &str) -> Result<Vec<Record>, StorageError> {
        self.check()?;
        let inner = self.inner.read();
        Ok(inner
            .records
            .range((prefix.to_string(), String::new())..)
            .take_while(|((path, _), _)| path.starts_with(prefix))
            .map(|(_, stored)| stored.record())
            .collect())
    }

    fn update_path_of_exact_match(
        &self,
        name: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<(), StorageError> {
        self.relocate(key(name, old_path), key(name, new_path))
    }

    fn rename_exact_match(
        &self,
        name: &str,
        path: &str,
        new_name: &str,
    ) -> Result<(), StorageError> {
        self.relocate(key(name, path), key(new_name, path))
    }

    fn delete_by_path_prefix(&self, prefix: &str) -> Result<usize, StorageError> {
        self.check()?;
        let mut inner = self.inner.write();
        let before = inner.records.len();
        inner.records.retain(|(path, _), _| !path.starts_with(prefix));
        Ok(before - inner.records.len())
    }

    fn delete_exact(&self, name: &str, path: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.write().records.remove(&key(name, path));
        Ok(())
    }
}
