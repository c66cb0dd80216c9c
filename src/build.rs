//! Output Writer/Orchestrator
//!
//! Runs the whole pipeline for one profile: load, resolve, validate, render
//! everything in memory, then hand the plan to a [`BuildSession`]. Nothing on
//! disk changes until validation is clean and every artifact has rendered.

mod manifest;
mod plan;
mod session;

pub use manifest::{collect_manifest, ManifestEntry};
pub use plan::{
    skill_union, Artifact, ArtifactKind, BuildPlan, PROFILE_DOCUMENT_NAME, SKILL_FILE_NAME,
};
pub use session::{ArtifactOutcome, BuildSession};

use crate::config::ProjectPaths;
use crate::error::CompileError;
use crate::resolve::{resolve_model, ResolvedModel};
use crate::source::load_sources;
use crate::validate::{validate, ValidationIssue, ValidationReport};
use serde::Serialize;
use tracing::info;

/// Summary of a successful compile.
#[derive(Debug, Clone, Serialize)]
pub struct CompileReport {
    pub profile: String,
    pub artifacts: Vec<ArtifactOutcome>,
    pub warnings: Vec<ValidationIssue>,
}

impl CompileReport {
    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.artifacts.iter().filter(|a| a.kind == kind).count()
    }
}

/// Load, resolve and validate a profile. The report may contain errors;
/// callers decide whether to proceed.
pub fn prepare(
    paths: &ProjectPaths,
    profile: &str,
) -> Result<(ResolvedModel, ValidationReport), CompileError> {
    let sources = load_sources(paths, profile)?;
    info!(
        profile,
        agents = sources.agents.len(),
        skills = sources.skills.len(),
        "Loaded sources"
    );

    let model = resolve_model(&sources)?;
    info!(profile, compile_set = model.agents.len(), "Resolved references");

    let report = validate(&model, paths);
    info!(
        profile,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validated"
    );
    Ok((model, report))
}

/// Compile a profile into `paths.out_dir`.
pub fn compile<F>(paths: &ProjectPaths, profile: &str, on_artifact: F) -> Result<CompileReport, CompileError>
where
    F: FnMut(&ArtifactOutcome),
{
    let (model, report) = prepare(paths, profile)?;
    if !report.is_valid() {
        return Err(CompileError::Validation(report));
    }

    let plan = BuildPlan::from_model(&model, paths)?;
    info!(profile, artifacts = plan.len(), "Rendered build plan");

    let session = BuildSession::new(&paths.out_dir);
    let artifacts = session.commit(&plan, on_artifact)?;

    Ok(CompileReport {
        profile: model.profile.name.clone(),
        artifacts,
        warnings: report.warnings,
    })
}
