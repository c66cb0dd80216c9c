//! Build session: owns the output root for one run.

use crate::build::manifest::{collect_manifest, ManifestEntry};
use crate::build::plan::{Artifact, ArtifactKind, BuildPlan, PROFILE_DOCUMENT_NAME};
use crate::error::CompileError;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What happened to one written artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    pub name: String,
    pub path: PathBuf,
    pub bytes: usize,
    /// BLAKE3 digest of the written bytes, hex encoded
    pub digest: String,
}

#[derive(Debug, Clone)]
pub struct BuildSession {
    out_dir: PathBuf,
}

impl BuildSession {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn agents_dir(&self) -> PathBuf {
        self.out_dir.join("agents")
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.out_dir.join("skills")
    }

    /// The profile document sits beside the output directory.
    pub fn profile_document_path(&self) -> PathBuf {
        self.out_dir
            .parent()
            .unwrap_or(&self.out_dir)
            .join(PROFILE_DOCUMENT_NAME)
    }

    pub fn destination(&self, artifact: &Artifact) -> PathBuf {
        match artifact.kind {
            ArtifactKind::Agent => self.agents_dir().join(&artifact.relative_path),
            ArtifactKind::Skill => self.skills_dir().join(&artifact.relative_path),
            ArtifactKind::ProfileDocument => self.profile_document_path(),
        }
    }

    /// Remove the previous run's `agents/` and `skills/` directories.
    pub fn clean(&self) -> Result<(), CompileError> {
        for dir in [self.agents_dir(), self.skills_dir()] {
            match fs::remove_dir_all(&dir) {
                Ok(()) => debug!(dir = %dir.display(), "Removed previous output"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(CompileError::write(&dir, e)),
            }
        }
        Ok(())
    }

    /// Clean, then write every artifact of `plan` in order.
    ///
    /// `on_artifact` sees each outcome as soon as the file is on disk. If any
    /// write fails, `agents/` and `skills/` are removed before the error is
    /// returned.
    pub fn commit<F>(&self, plan: &BuildPlan, mut on_artifact: F) -> Result<Vec<ArtifactOutcome>, CompileError>
    where
        F: FnMut(&ArtifactOutcome),
    {
        self.clean()?;

        let mut outcomes = Vec::with_capacity(plan.len());
        for artifact in plan.artifacts() {
            match self.write_artifact(artifact) {
                Ok(outcome) => {
                    on_artifact(&outcome);
                    outcomes.push(outcome);
                }
                Err(err) => {
                    self.discard();
                    return Err(err);
                }
            }
        }

        info!(
            out_dir = %self.out_dir.display(),
            artifacts = outcomes.len(),
            "Build committed"
        );
        Ok(outcomes)
    }

    /// Relative path and digest of every file under the output root.
    pub fn manifest(&self) -> Result<Vec<ManifestEntry>, CompileError> {
        collect_manifest(&self.out_dir)
    }

    fn write_artifact(&self, artifact: &Artifact) -> Result<ArtifactOutcome, CompileError> {
        let path = self.destination(artifact);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CompileError::write(parent, e))?;
        }
        fs::write(&path, &artifact.contents).map_err(|e| CompileError::write(&path, e))?;

        let digest = hex::encode(blake3::hash(&artifact.contents).as_bytes());
        debug!(
            kind = %artifact.kind,
            name = %artifact.name,
            path = %path.display(),
            "Wrote artifact"
        );
        Ok(ArtifactOutcome {
            kind: artifact.kind,
            name: artifact.name.clone(),
            path,
            bytes: artifact.contents.len(),
            digest,
        })
    }

    fn discard(&self) {
        for dir in [self.agents_dir(), self.skills_dir()] {
            match fs::remove_dir_all(&dir) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!(dir = %dir.display(), error = %e, "Failed to remove partial output"),
            }
        }
    }
}
