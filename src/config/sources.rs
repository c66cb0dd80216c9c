//! Config sources: project file (`agentc.toml`) and `AGENTC__*` environment.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;
use tracing::debug;

/// Project configuration file name, looked up at the project root.
pub const PROJECT_CONFIG_FILE: &str = "agentc.toml";

/// Add `<root>/agentc.toml` to the builder if it exists.
pub fn add_project_file(
    builder: ConfigBuilder<DefaultState>,
    root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = root.join(PROJECT_CONFIG_FILE);
    if !path.is_file() {
        debug!(config_path = %path.display(), "No project config file, using defaults");
        return Ok(builder);
    }
    Ok(builder.add_source(File::from(path).required(false)))
}

/// Add an explicitly requested config file.
pub fn add_explicit_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path.to_path_buf()).required(true))
}

/// Environment overrides, e.g. `AGENTC__PATHS__OUT_DIR=dist`.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("AGENTC")
            .prefix_separator("__")
            .separator("__"),
    )
}
