//! Core types for the classifier record model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the distinguished root record.
pub const ROOT_NAME: &str = "root";

/// Path of the distinguished root record.
pub const ROOT_PATH: &str = "/";

/// Record: the persisted unit, identified by `(name, path)`.
///
/// `path` is a materialized path ending in `/`. A record is a direct child of
/// `P` when its path equals `P.path + P.name + "/"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub path: String,
}

impl Record {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The root record `{name: "root", path: "/"}`.
    pub fn root() -> Self {
        Self::new(ROOT_NAME, ROOT_PATH)
    }

    pub fn is_root(&self) -> bool {
        self.name == ROOT_NAME && self.path == ROOT_PATH
    }

    /// Path shared by every direct child of this record.
    pub fn child_path(&self) -> String {
        format!("{}{}/", self.path, self.name)
    }
}

/// Opaque storage-generated identifier. Not used for domain logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct StorageId(pub u64);

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0.to_be_bytes()))
    }
}

impl From<StorageId> for String {
    fn from(id: StorageId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for StorageId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let bytes = hex::decode(&value).map_err(|e| format!("invalid storage id {value:?}: {e}"))?;
        let bytes: [u8; 8] = bytes
            .try_into()
            .map_err(|_| format!("storage id {value:?} must be 8 bytes"))?;
        Ok(StorageId(u64::from_be_bytes(bytes)))
    }
}

/// Result of a successful `add`: the storage id plus the name and the
/// client-relative path as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    pub id: StorageId,
    pub name: String,
    pub path: String,
}
