//! CLI route: single route table and run context. Dispatches to the pipeline and presentation.

use crate::build::{self, ArtifactOutcome, BuildSession};
use crate::cli::help::command_name;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_artifact_outcome, format_compile_report, format_profiles, format_validation_report,
};
use crate::config::{ConfigLoader, ProjectPaths};
use crate::error::CompileError;
use crate::source::discover_profiles;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: project root, config path, and resolved layout.
/// Built from the root and optional config path using ConfigLoader only.
pub struct RunContext {
    root: PathBuf,
    config_path: Option<PathBuf>,
    paths: ProjectPaths,
    verbose: bool,
}

impl RunContext {
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, CompileError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&root)?,
        };
        let paths = config.paths.resolve(&root)?;
        debug!(
            root = %paths.root.display(),
            out_dir = %paths.out_dir.display(),
            "Resolved project layout"
        );
        Ok(Self {
            root,
            config_path,
            paths,
            verbose: false,
        })
    }

    /// Include the output manifest in `compile` output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, CompileError> {
        let started = Instant::now();
        let result = match command {
            Commands::Compile { profile } => self.handle_compile(profile),
            Commands::Validate { profile, format } => self.handle_validate(profile, *format),
            Commands::Profiles { format } => self.handle_profiles(*format),
        };
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn handle_compile(&self, profile: &str) -> Result<String, CompileError> {
        let report = build::compile(&self.paths, profile, |outcome: &ArtifactOutcome| {
            debug!(
                kind = %outcome.kind,
                name = %outcome.name,
                bytes = outcome.bytes,
                digest = %outcome.digest,
                "Artifact written"
            );
            println!("{}", format_artifact_outcome(outcome));
        })?;

        let manifest = if self.verbose {
            Some(BuildSession::new(&self.paths.out_dir).manifest()?)
        } else {
            None
        };
        Ok(format_compile_report(&report, manifest.as_deref()))
    }

    fn handle_validate(&self, profile: &str, format: OutputFormat) -> Result<String, CompileError> {
        let (_, report) = build::prepare(&self.paths, profile)?;
        if !report.is_valid() {
            return Err(CompileError::Validation(report));
        }
        Ok(format_validation_report(profile, &report, format))
    }

    fn handle_profiles(&self, format: OutputFormat) -> Result<String, CompileError> {
        let profiles = discover_profiles(&self.paths.profiles_dir)?;
        Ok(format_profiles(&profiles, format))
    }
}
