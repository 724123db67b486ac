//! Sled-backed record store.
//!
//! Records live in the `classifier` tree. Keys are `path ++ 0x00 ++ name`, so
//! byte order of keys is the lexicographic order of paths and a prefix scan on
//! the key is a prefix scan on the path. Values are bincode-encoded
//! [`StoredRecord`]s.

use crate::error::StorageError;
use crate::store::{RecordStore, StoredRecord};
use crate::types::{Record, StorageId};
use std::path::Path;
use tracing::debug;

const TREE_NAME: &str = "classifier";
const KEY_SEPARATOR: u8 = 0;

fn encode_key(name: &str, path: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(path.len() + 1 + name.len());
    key.extend_from_slice(path.as_bytes());
    key.push(KEY_SEPARATOR);
    key.extend_from_slice(name.as_bytes());
    key
}

pub struct SledRecordStore {
    db: sled::Db,
    tree: sled::Tree,
}

impl SledRecordStore {
    /// Open (or create) the store at `path`.
    pub fn new(path: &Path) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    pub fn from_db(db: sled::Db) -> Result<Self, StorageError> {
        let tree = db.open_tree(TREE_NAME)?;
        Ok(Self { db, tree })
    }

    fn decode(value: &[u8]) -> Result<StoredRecord, StorageError> {
        Ok(bincode::deserialize(value)?)
    }

    fn get(&self, name: &str, path: &str) -> Result<Option<StoredRecord>, StorageError> {
        self.tree
            .get(encode_key(name, path))?
            .map(|value| Self::decode(&value))
            .transpose()
    }

    fn stored(&self, record: &Record) -> Result<(StoredRecord, Vec<u8>), StorageError> {
        let stored = StoredRecord {
            id: self.db.generate_id()?,
            name: record.name.clone(),
            path: record.path.clone(),
        };
        let value = bincode::serialize(&stored)?;
        Ok((stored, value))
    }

    /// Re-key one record in a single batch.
    fn relocate(
        &self,
        name: &str,
        path: &str,
        new_name: &str,
        new_path: &str,
    ) -> Result<(), StorageError> {
        let Some(mut stored) = self.get(name, path)? else {
            return Ok(());
        };
        stored.name = new_name.to_string();
        stored.path = new_path.to_string();

        let mut batch = sled::Batch::default();
        batch.remove(encode_key(name, path));
        batch.insert(
            encode_key(new_name, new_path),
            bincode::serialize(&stored)?,
        );
        self.tree.apply_batch(batch)?;
        Ok(())
    }

    fn collect(
        &self,
        iter: impl Iterator<Item = sled::Result<(sled::IVec, sled::IVec)>>,
    ) -> Result<Vec<Record>, StorageError> {
        iter.map(|item| -> Result<Record, StorageError> {
            let (_, value) = item?;
            Ok(Self::decode(&value)?.record())
        })
        .collect()
    }
}

impl RecordStore for SledRecordStore {
    fn exists_exact(&self, name: &str, path: &str) -> Result<bool, StorageError> {
        Ok(self.tree.contains_key(encode_key(name, path))?)
    }

    fn insert(&self, record: &Record) -> Result<StorageId, StorageError> {
        let (stored, value) = self.stored(record)?;
        self.tree
            .insert(encode_key(&record.name, &record.path), value)?;
        debug!(id = stored.id, name = %record.name, path = %record.path, "Inserted record");
        Ok(StorageId(stored.id))
    }

    fn insert_if_absent(&self, record: &Record) -> Result<Option<StorageId>, StorageError> {
        let (stored, value) = self.stored(record)?;
        let swapped = self.tree.compare_and_swap(
            encode_key(&record.name, &record.path),
            None as Option<&[u8]>,
            Some(value),
        )?;
        Ok(swapped.ok().map(|_| StorageId(stored.id)))
    }

    fn find_all(&self) -> Result<Vec<Record>, StorageError> {
        self.collect(self.tree.iter())
    }

    fn find_by_name_and_parent_path(
        &self,
        name: &str,
        parent_path: &str,
    ) -> Result<Vec<Record>, StorageError> {
        Ok(self
            .get(name, parent_path)?
            .map(|stored| stored.record())
            .into_iter()
            .collect())
    }

    fn find_by_path_prefix(&self, prefix: &str) -> Result<Vec<Record>, StorageError> {
        self.collect(self.tree.scan_prefix(prefix.as_bytes()))
    }

    fn update_path_of_exact_match(
        &self,
        name: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<(), StorageError> {
        self.relocate(name, old_path, name, new_path)
    }

    fn rename_exact_match(
        &self,
        name: &str,
        path: &str,
        new_name: &str,
    ) -> Result<(), StorageError> {
        self.relocate(name, path, new_name, path)
    }

    fn delete_by_path_prefix(&self, prefix: &str) -> Result<usize, StorageError> {
        let mut batch = sled::Batch::default();
        let mut count = 0;
        for item in self.tree.scan_prefix(prefix.as_bytes()).keys() {
            batch.remove(item?);
            count += 1;
        }
        self.tree.apply_batch(batch)?;
        debug!(prefix, count, "Deleted records by prefix");
        Ok(count)
    }

    fn delete_exact(&self, name: &str, path: &str) -> Result<(), StorageError> {
        self.tree.remove(encode_key(name, path))?;
        Ok(())
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}
