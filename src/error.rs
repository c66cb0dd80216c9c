//! Error types for the agent compiler.
//!
//! Every stage of the pipeline reports through [`CompileError`]. Load and
//! resolution failures abort immediately; validation problems are collected
//! into a single [`ValidationReport`] before the run aborts.

use crate::validate::ValidationReport;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum CompileError {
    /// A YAML source is missing or could not be parsed.
    #[error("Failed to load {}: {message}", .path.display())]
    ConfigLoad { path: PathBuf, message: String },

    /// A profile references a skill id that skills.yaml does not define.
    #[error("Agent '{agent}' references unknown skill '{skill}'")]
    UnknownSkill { agent: String, skill: String },

    /// A profile lists an agent that agents.yaml does not define.
    #[error("Profile '{profile}' lists agent '{agent}', which is not defined in agents.yaml")]
    UnknownAgent { profile: String, agent: String },

    #[error(
        "Validation failed: {} error(s), {} warning(s)",
        .0.errors.len(),
        .0.warnings.len()
    )]
    Validation(ValidationReport),

    #[error("Failed to render agent '{agent}': {message}")]
    Render { agent: String, message: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CompileError {
    /// Taxonomy bucket, stable across releases.
    pub fn category(&self) -> &'static str {
        match self {
            CompileError::ConfigLoad { .. } => "config",
            CompileError::UnknownSkill { .. } | CompileError::UnknownAgent { .. } => "resolution",
            CompileError::Validation(_) => "validation",
            CompileError::Render { .. } => "render",
            CompileError::Read { .. } => "read",
            CompileError::Write { .. } => "write",
            CompileError::Config(_) => "config",
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompileError::Write {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompileError::Read {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for CompileError {
    fn from(err: config::ConfigError) -> Self {
        CompileError::Config(err.to_string())
    }
}
