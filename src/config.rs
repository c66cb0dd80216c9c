//! Configuration System
//!
//! Layered project configuration: where the YAML sources and prompt fragments
//! live, where compiled output goes, and how logging behaves. Precedence, lowest
//! to highest: built-in defaults, `agentc.toml` at the project root (or an
//! explicit file), then `AGENTC__*` environment variables.

use crate::error::CompileError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge_policy;
mod paths;
mod sources;

pub use paths::{is_contained_path, is_plain_name, ProjectPaths, SourceLayout};
pub use sources::PROJECT_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Source and output layout
    #[serde(default)]
    pub paths: SourceLayout,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Loads [`CompilerConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project root, picking up `agentc.toml` when present.
    pub fn load(root: &Path) -> Result<CompilerConfig, CompileError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::add_project_file(builder, root)?;
        let builder = sources::add_environment(builder);
        let config: CompilerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<CompilerConfig, CompileError> {
        if !path.is_file() {
            return Err(CompileError::ConfigLoad {
                path: path.to_path_buf(),
                message: "configuration file not found".to_string(),
            });
        }
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::add_explicit_file(builder, path);
        let builder = sources::add_environment(builder);
        let config: CompilerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}
