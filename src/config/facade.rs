//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::ClassifierConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, an optional explicit file
    /// and the environment.
    pub fn load(explicit: Option<&Path>) -> Result<ClassifierConfig, ConfigError> {
        MergeService::load(explicit)
    }
}
