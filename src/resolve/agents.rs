//! Agent Reference Resolver

use crate::error::CompileError;
use crate::resolve::skills::{resolve_skill_assignments, SkillAssignment};
use crate::source::{AgentCatalog, AgentDefinition, ProfileConfig, Sources};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// An agent definition merged with its profile skill assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentConfig {
    pub name: String,
    pub definition: AgentDefinition,
    pub skills: SkillAssignment,
}

/// Everything one compile needs after resolution.
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    pub profile: ProfileConfig,
    /// In `agent_skills` declaration order
    pub agents: Vec<AgentConfig>,
}

impl ResolvedModel {
    pub fn agent(&self, name: &str) -> Option<&AgentConfig> {
        self.agents.iter().find(|agent| agent.name == name)
    }

    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.iter().map(|agent| agent.name.as_str()).collect()
    }
}

/// Build the compile set from `profile.agent_skills` keys and attach each
/// agent's definition and skills.
pub fn resolve_agents(
    profile: &ProfileConfig,
    catalog: &AgentCatalog,
    mut assignments: IndexMap<String, SkillAssignment>,
) -> Result<Vec<AgentConfig>, CompileError> {
    profile
        .compile_set()
        .map(|name| -> Result<AgentConfig, CompileError> {
            let definition = catalog
                .get(name)
                .ok_or_else(|| CompileError::UnknownAgent {
                    profile: profile.name.clone(),
                    agent: name.to_string(),
                })?;
            let skills = assignments.shift_remove(name).unwrap_or_default();
            debug!(
                agent = name,
                precompiled = skills.precompiled.len(),
                dynamic = skills.dynamic.len(),
                "Resolved agent"
            );
            Ok(AgentConfig {
                name: name.to_string(),
                definition: definition.clone(),
                skills,
            })
        })
        .collect()
}

/// Run both resolvers over loaded sources.
pub fn resolve_model(sources: &Sources) -> Result<ResolvedModel, CompileError> {
    let assignments = resolve_skill_assignments(&sources.profile, &sources.skills)?;
    let agents = resolve_agents(&sources.profile, &sources.agents, assignments)?;
    Ok(ResolvedModel {
        profile: sources.profile.clone(),
        agents,
    })
}
