//! In-memory build plan: every artifact rendered before anything is written.

use crate::assemble::assemble_agent;
use crate::config::ProjectPaths;
use crate::error::CompileError;
use crate::render::render_agent;
use crate::resolve::{ResolvedModel, ResolvedSkill};
use crate::slug::slugify;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// File name of a written skill inside its slug directory.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// File name of the profile document next to the output directory.
pub const PROFILE_DOCUMENT_NAME: &str = "CLAUDE.md";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Agent,
    Skill,
    ProfileDocument,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Agent => "agent",
            ArtifactKind::Skill => "skill",
            ArtifactKind::ProfileDocument => "profile_document",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One file to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// Agent name, skill id, or profile name
    pub name: String,
    /// Relative to the directory that holds this kind of artifact
    pub relative_path: PathBuf,
    pub contents: Vec<u8>,
}

/// Ordered artifacts for one run: agents, then skills, then the profile document.
#[derive(Debug, Clone, Default)]
pub struct BuildPlan {
    artifacts: Vec<Artifact>,
}

impl BuildPlan {
    /// Assemble and render everything a validated model produces.
    pub fn from_model(model: &ResolvedModel, paths: &ProjectPaths) -> Result<Self, CompileError> {
        let mut artifacts = Vec::new();

        for agent in &model.agents {
            let ctx = assemble_agent(agent, &model.profile, paths)?;
            let document = render_agent(&ctx)?;
            debug!(agent = %agent.name, bytes = document.len(), "Rendered agent");
            artifacts.push(Artifact {
                kind: ArtifactKind::Agent,
                name: agent.name.clone(),
                relative_path: PathBuf::from(format!("{}.md", agent.name)),
                contents: document.into_bytes(),
            });
        }

        for (id, skill) in skill_union(model) {
            let Some(path) = skill.path.as_deref() else {
                continue;
            };
            let source = paths.skill_source(path);
            let contents = std::fs::read(&source).map_err(|e| CompileError::read(&source, e))?;
            artifacts.push(Artifact {
                kind: ArtifactKind::Skill,
                name: id.to_string(),
                relative_path: PathBuf::from(slugify(id)).join(SKILL_FILE_NAME),
                contents,
            });
        }

        let profile = &model.profile;
        let document = paths.profile_document(&profile.name, &profile.claude_md);
        artifacts.push(Artifact {
            kind: ArtifactKind::ProfileDocument,
            name: profile.name.clone(),
            relative_path: PathBuf::from(PROFILE_DOCUMENT_NAME),
            contents: std::fs::read(&document).map_err(|e| CompileError::read(&document, e))?,
        });

        Ok(Self { artifacts })
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_artifacts(artifacts: Vec<Artifact>) -> Self {
        Self { artifacts }
    }
}

/// Every path-bearing skill referenced by any agent, de-duplicated by id in
/// first-seen order.
pub fn skill_union(model: &ResolvedModel) -> IndexMap<&str, &ResolvedSkill> {
    let mut union = IndexMap::new();
    for skill in model.agents.iter().flat_map(|agent| agent.skills.iter()) {
        if skill.path.is_some() {
            union.entry(skill.id.as_str()).or_insert(skill);
        }
    }
    union
}
