//! Environment variable source: CLASSIFIER_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses CLASSIFIER__ prefix and __ as separator for nested keys,
/// e.g. `CLASSIFIER__SERVICE__RENAME_STRATEGY=literal`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("CLASSIFIER")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
