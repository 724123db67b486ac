//! Classifier: Hierarchical Classification Tree
//!
//! A folder-like taxonomy of named categories kept as flat records with
//! materialized paths. Supports reading subtrees, adding nodes, and renaming
//! or removing nodes together with all of their descendants.

pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod validation;

pub use error::{ClassifierError, ErrorKind};
pub use service::{ClassifierService, RenameStrategy, ServiceOptions};
pub use store::{MemoryRecordStore, RecordStore, SledRecordStore};
pub use tree::{TreeBuilder, TreeNode};
pub use types::{CreatedRecord, Record, StorageId};
