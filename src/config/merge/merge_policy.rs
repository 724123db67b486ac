//! Base layer for every configuration build: the serialized defaults.

use crate::config::ClassifierConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder whose lowest layer is `ClassifierConfig::default()`.
pub(crate) fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&ClassifierConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
