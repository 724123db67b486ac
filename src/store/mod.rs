//! Record Store
//!
//! Contract over the document store holding classifier records. Every method
//! is a single round-trip; none retry, and a cascade built from several calls
//! is not atomic.

pub mod memory;
pub mod persistence;

use crate::error::StorageError;
use crate::tree::path;
use crate::types::{Record, StorageId};
use serde::{Deserialize, Serialize};

pub use memory::MemoryRecordStore;
pub use persistence::SledRecordStore;

/// Record as persisted, with its storage identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: u64,
    pub name: String,
    pub path: String,
}

impl StoredRecord {
    pub fn record(&self) -> Record {
        Record::new(self.name.clone(), self.path.clone())
    }
}

/// Record store interface
pub trait RecordStore: Send + Sync {
    fn exists_exact(&self, name: &str, path: &str) -> Result<bool, StorageError>;

    /// Whether the record owning `path` (its parent) exists.
    fn exists_parent(&self, path: &str) -> Result<bool, StorageError> {
        match path::split_parent_of(path) {
            Some((parent_name, parent_path)) => self.exists_exact(&parent_name, &parent_path),
            None => Ok(false),
        }
    }

    fn insert(&self, record: &Record) -> Result<StorageId, StorageError>;

    /// Insert unless a record with the same identity exists, atomically.
    /// Returns `None` when the record was already present.
    fn insert_if_absent(&self, record: &Record) -> Result<Option<StorageId>, StorageError>;

    fn find_all(&self) -> Result<Vec<Record>, StorageError>;

    fn find_by_name_and_parent_path(
        &self,
        name: &str,
        parent_path: &str,
    ) -> Result<Vec<Record>, StorageError>;

    /// Records whose path starts with `prefix`, sorted ascending by path.
    fn find_by_path_prefix(&self, prefix: &str) -> Result<Vec<Record>, StorageError>;

    /// Move the record `(name, old_path)` to `new_path`, keeping its id.
    fn update_path_of_exact_match(
        &self,
        name: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<(), StorageError>;

    fn rename_exact_match(&self, name: &str, path: &str, new_name: &str)
        -> Result<(), StorageError>;

    /// Delete every record whose path starts with `prefix`.
    fn delete_by_path_prefix(&self, prefix: &str) -> Result<usize, StorageError>;

    fn delete_exact(&self, name: &str, path: &str) -> Result<(), StorageError>;

    /// Make prior writes durable. A no-op for stores without buffering.
    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
