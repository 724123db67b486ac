//! Classifier Service
//!
//! Read, add, remove and rename over the record store. Every operation is a
//! sequential chain of store calls: names are validated before the store is
//! touched, existence is checked read-before-write, and cascades apply one
//! store call at a time. A cascade interrupted by a storage failure is not
//! rolled back.

use crate::config::ClassifierConfig;
use crate::error::{ClassifierError, ConflictCause};
use crate::store::{RecordStore, SledRecordStore};
use crate::tree::{path, TreeBuilder, TreeNode};
use crate::types::{CreatedRecord, Record};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a rename rewrites the paths of the renamed node's descendants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameStrategy {
    /// Replace only the renamed node's own segment at the head of each path.
    #[default]
    Segment,
    /// Replace every textual occurrence of the old name in each path.
    Literal,
}

impl RenameStrategy {
    /// Compute the new path of a descendant stored at `path`.
    ///
    /// `prefix` is the renamed node's child prefix (`parent + old + "/"`),
    /// which every descendant path starts with.
    pub fn rewrite(
        self,
        path: &str,
        prefix: &str,
        old_name: &str,
        new_prefix: &str,
        new_name: &str,
    ) -> String {
        match self {
            RenameStrategy::Literal => path.replace(old_name, new_name),
            RenameStrategy::Segment => match path.strip_prefix(prefix) {
                Some(rest) => format!("{}{}", new_prefix, rest),
                None => path.to_string(),
            },
        }
    }
}

/// Behavior knobs for the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOptions {
    #[serde(default)]
    pub rename_strategy: RenameStrategy,
}

/// Orchestrates validation, existence checks and store calls.
pub struct ClassifierService {
    store: Arc<dyn RecordStore>,
    options: ServiceOptions,
}

impl ClassifierService {
    /// Create a service over `store`, creating the root record if absent.
    pub fn new(
        store: Arc<dyn RecordStore>,
        options: ServiceOptions,
    ) -> Result<Self, ClassifierError> {
        if let Some(id) = store.insert_if_absent(&Record::root())? {
            info!(%id, "Created root record");
        }
        Ok(Self { store, options })
    }

    /// Open the sled store named by `config` and create a service over it.
    pub fn open(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let store_path = config.storage.resolve_path()?;
        std::fs::create_dir_all(&store_path).map_err(|e| {
            ClassifierError::ConfigError(format!(
                "Failed to create store directory {}: {}",
                store_path.display(),
                e
            ))
        })?;
        let store = SledRecordStore::new(&store_path)?;
        info!(path = %store_path.display(), "Opened record store");
        Self::new(Arc::new(store), config.service.clone())
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Flush the store and release this handle.
    pub fn close(self) -> Result<(), ClassifierError> {
        self.store.flush()?;
        Ok(())
    }

    /// Read the subtree at `raw_path`. The absolute root returns the whole tree.
    pub fn read(&self, raw_path: &str) -> Result<TreeNode, ClassifierError> {
        let canonical = path::normalize(raw_path);
        let not_found = || {
            let (name, parent) = path::split_parent_of(&canonical)
                .unwrap_or_else(|| (String::new(), canonical.clone()));
            ClassifierError::NotFound { name, path: parent }
        };

        let records = if path::is_root(&canonical) {
            let mut records = self.store.find_all()?;
            let root_at = records
                .iter()
                .position(Record::is_root)
                .ok_or_else(not_found)?;
            records.swap(0, root_at);
            records
        } else {
            let (name, parent_path) = path::split_parent_of(&canonical).ok_or_else(not_found)?;
            let mut records = self
                .store
                .find_by_name_and_parent_path(&name, &parent_path)?;
            if records.is_empty() {
                return Err(not_found());
            }
            records.extend(self.store.find_by_path_prefix(&canonical)?);
            records
        };

        debug!(path = %canonical, count = records.len(), "Loaded records for read");
        TreeBuilder::build(records).ok_or_else(not_found)
    }

    /// Insert `name` under `raw_path`, whose node must already exist.
    pub fn add(&self, name: &str, raw_path: &str) -> Result<CreatedRecord, ClassifierError> {
        let relative = path::with_trailing_slash(raw_path);
        let canonical = path::normalize(raw_path);
        self.check_name(name, &relative)?;

        if !self.store.exists_parent(&canonical)? {
            return Err(self.conflict(name, &canonical, ConflictCause::ParentMissing));
        }
        if self.store.exists_exact(name, &canonical)? {
            return Err(self.conflict(name, &canonical, ConflictCause::RecordExists));
        }

        let id = self.store.insert(&Record::new(name, canonical.as_str()))?;
        info!(%id, name, path = %canonical, "Added record");
        Ok(CreatedRecord {
            id,
            name: name.to_string(),
            path: relative,
        })
    }

    /// Remove `name` under `raw_path` together with all of its descendants.
    pub fn remove(&self, name: &str, raw_path: &str) -> Result<(), ClassifierError> {
        let relative = path::with_trailing_slash(raw_path);
        let canonical = path::normalize(raw_path);
        self.check_name(name, &relative)?;
        self.require(name, &canonical)?;

        // Descendants go first so none outlives its ancestor.
        let prefix = path::child_prefix(name, &canonical);
        let descendants = self.store.delete_by_path_prefix(&prefix)?;
        self.store.delete_exact(name, &canonical)?;
        info!(name, path = %canonical, descendants, "Removed record");
        Ok(())
    }

    /// Rename `name` under `raw_path` to `new_name`, moving every descendant.
    pub fn rename(
        &self,
        name: &str,
        raw_path: &str,
        new_name: &str,
    ) -> Result<(), ClassifierError> {
        let relative = path::with_trailing_slash(raw_path);
        let canonical = path::normalize(raw_path);
        self.check_name(name, &relative)?;
        self.check_name(new_name, &relative)?;
        self.require(name, &canonical)?;
        if new_name != name && self.store.exists_exact(new_name, &canonical)? {
            return Err(self.conflict(new_name, &canonical, ConflictCause::RecordExists));
        }

        let prefix = path::child_prefix(name, &canonical);
        let new_prefix = path::child_prefix(new_name, &canonical);
        let strategy = self.options.rename_strategy;
        let descendants = self.store.find_by_path_prefix(&prefix)?;
        let moved = descendants.len();
        for record in descendants {
            let new_path = strategy.rewrite(&record.path, &prefix, name, &new_prefix, new_name);
            self.store
                .update_path_of_exact_match(&record.name, &record.path, &new_path)?;
        }
        self.store.rename_exact_match(name, &canonical, new_name)?;
        info!(name, new_name, path = %canonical, moved, ?strategy, "Renamed record");
        Ok(())
    }

    fn check_name(&self, name: &str, path: &str) -> Result<(), ClassifierError> {
        validation::validate(name, path).map_err(|rule| {
            warn!(name, path, %rule, "Rejected name");
            ClassifierError::InvalidName {
                name: name.to_string(),
                path: path.to_string(),
            }
        })
    }

    fn require(&self, name: &str, canonical: &str) -> Result<(), ClassifierError> {
        if self.store.exists_exact(name, canonical)? {
            Ok(())
        } else {
            Err(ClassifierError::NotFound {
                name: name.to_string(),
                path: canonical.to_string(),
            })
        }
    }

    fn conflict(&self, name: &str, canonical: &str, cause: ConflictCause) -> ClassifierError {
        warn!(name, path = %canonical, %cause, "Refused write");
        ClassifierError::Conflict { cause }
    }
}
