//! Skill Reference Resolver

use crate::error::CompileError;
use crate::source::{ProfileConfig, SkillCatalog, SkillReference};
use indexmap::IndexMap;
use serde::Serialize;

/// A skill definition merged with one agent's usage text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSkill {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Full file content, present only after assembly
    #[serde(skip)]
    pub content: Option<String>,
}

impl ResolvedSkill {
    /// Usage text, treating whitespace-only text as absent.
    pub fn usage_text(&self) -> Option<&str> {
        self.usage
            .as_deref()
            .map(str::trim)
            .filter(|usage| !usage.is_empty())
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }
}

/// Skills assigned to one agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillAssignment {
    /// Embedded verbatim into the compiled agent
    pub precompiled: Vec<ResolvedSkill>,
    /// Referenced by metadata only; the host loads them at run time
    pub dynamic: Vec<ResolvedSkill>,
}

impl SkillAssignment {
    /// Precompiled then dynamic skills, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedSkill> {
        self.precompiled.iter().chain(self.dynamic.iter())
    }
}

/// Resolve one reference for `agent`.
pub fn resolve_skill(
    agent: &str,
    reference: &SkillReference,
    catalog: &SkillCatalog,
) -> Result<ResolvedSkill, CompileError> {
    let definition = catalog
        .get(&reference.id)
        .ok_or_else(|| CompileError::UnknownSkill {
            agent: agent.to_string(),
            skill: reference.id.clone(),
        })?;

    Ok(ResolvedSkill {
        id: definition.id.clone(),
        path: definition.path.clone(),
        name: definition.name.clone(),
        description: definition.description.clone(),
        usage: reference.usage.clone(),
        content: None,
    })
}

/// Resolve every agent entry of `profile.agent_skills`, keyed by agent name in
/// declaration order.
pub fn resolve_skill_assignments(
    profile: &ProfileConfig,
    catalog: &SkillCatalog,
) -> Result<IndexMap<String, SkillAssignment>, CompileError> {
    let mut assignments = IndexMap::with_capacity(profile.agent_skills.len());
    for (agent, refs) in &profile.agent_skills {
        let precompiled = refs
            .precompiled
            .iter()
            .map(|reference| resolve_skill(agent, reference, catalog))
            .collect::<Result<Vec<_>, _>>()?;
        let dynamic = refs
            .dynamic
            .iter()
            .map(|reference| resolve_skill(agent, reference, catalog))
            .collect::<Result<Vec<_>, _>>()?;
        assignments.insert(
            agent.clone(),
            SkillAssignment {
                precompiled,
                dynamic,
            },
        );
    }
    Ok(assignments)
}
