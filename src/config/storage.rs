//! StorageConfig and path resolution for the record store.

use crate::config::xdg;
use crate::error::ClassifierError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the sled store. `None` means `$XDG_DATA_HOME/classifier/store`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the store directory to an actual filesystem location.
    pub fn resolve_path(&self) -> Result<PathBuf, ClassifierError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(xdg::data_dir()?.join("store")),
        }
    }
}
