//! agentc: Profile-Driven Agent Compiler
//!
//! Resolves agent definitions, skill definitions and a deployment profile
//! into compiled agent documents and skill files. The pipeline is strictly
//! linear: load sources, resolve references, validate everything against the
//! filesystem, render in memory, then write the output tree in one session.

pub mod assemble;
pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod resolve;
pub mod slug;
pub mod source;
pub mod validate;

pub use build::{compile, prepare, CompileReport};
pub use config::ProjectPaths;
pub use error::CompileError;
pub use validate::{ValidationIssue, ValidationReport};
